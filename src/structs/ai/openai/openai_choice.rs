use serde::{Deserialize, Serialize};
use crate::structs::ai::openai::openai_response_message::OpenAIResponseMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIChoice {
    #[serde(default)]
    pub index: u32,
    pub message: OpenAIResponseMessage,
    pub finish_reason: Option<String>,
}
