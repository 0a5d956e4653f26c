use serde::{Deserialize, Serialize};
use crate::structs::ai::openai::openai_choice::OpenAIChoice;
use crate::structs::ai::openai::openai_usage::OpenAIUsage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<OpenAIChoice>,
    pub usage: OpenAIUsage,
}
