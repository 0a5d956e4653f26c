/// The reply extracted from a chat completion response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub content: String,
    pub total_tokens: u64,
    pub finish_reason: Option<String>,
    pub model: Option<String>,
}
