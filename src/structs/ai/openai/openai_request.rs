use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::structs::transcript::message::Message;

/// Body of a `POST /chat/completions` call. Pass-through options are flattened
/// next to `model` and `messages`.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,

    pub messages: &'a [Message],

    #[serde(flatten)]
    pub options: &'a BTreeMap<String, Value>,
}
