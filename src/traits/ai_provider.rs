use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::completion::Completion;
use crate::structs::transcript::transcript::Transcript;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Submits the whole transcript as one chat completion request.
    async fn chat(&self, transcript: &Transcript) -> Result<Completion, AiProviderError>;
}
