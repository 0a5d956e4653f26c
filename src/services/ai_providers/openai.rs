use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::constants::{CHAT_COMPLETIONS_PATH, FINISH_REASON_LENGTH};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::openai::openai_error_response::OpenAIErrorResponse;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::structs::completion::Completion;
use crate::structs::config::completion_options::CompletionOptions;
use crate::structs::config::config::Config;
use crate::structs::transcript::transcript::Transcript;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct OpenAIProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    options: CompletionOptions,
}

impl OpenAIProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            base_url: crate::config::constants::DEFAULT_OPENAI_BASE_URL.to_string(),
            client: Client::new(),
            model,
            options: CompletionOptions::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.openai_token.clone(), config.model.clone())
            .with_base_url(config.openai_base_url.clone())
            .with_options(config.openai_completion_options.clone())
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }

    fn get_request<'a>(&'a self, transcript: &'a Transcript) -> OpenAIRequest<'a> {
        OpenAIRequest {
            model: &self.model,
            messages: transcript.messages(),
            options: self.options.as_map(),
        }
    }

    async fn make_request(&self, url: &str, request_body: &OpenAIRequest<'_>) -> Result<reqwest::Response, AiProviderError> {
        log::info!("📦 Request model: {}, {} messages", request_body.model, request_body.messages.len());

        self.client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }

    /// Maps a non-success status and its body to a provider error.
    pub fn error_for_status(status: StatusCode, error_text: &str) -> AiProviderError {
        let detail = serde_json::from_str::<OpenAIErrorResponse>(error_text)
            .map(|body| match body.error.error_type {
                Some(error_type) => format!("{}: {}", error_type, body.error.message),
                None => body.error.message,
            })
            .unwrap_or_else(|_| error_text.to_string());

        match status.as_u16() {
            401 => AiProviderError::AuthenticationError(detail),
            429 => AiProviderError::RateLimitError(detail),
            _ => AiProviderError::ApiError(format!("HTTP {status}: {detail}")),
        }
    }

    /// Takes the last choice of the response, plus the reported token usage.
    pub fn select_completion(response: OpenAIResponse) -> Result<Completion, AiProviderError> {
        let total_tokens = response.usage.total_tokens;
        let choice = response
            .choices
            .into_iter()
            .last()
            .ok_or_else(|| AiProviderError::SerializationError("No choices in response".to_string()))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        if choice.finish_reason.as_deref() == Some(FINISH_REASON_LENGTH) {
            log::warn!("⚠️  Completion was cut off by the token limit (finish_reason = length)");
        }

        Ok(Completion {
            content,
            total_tokens,
            finish_reason: choice.finish_reason,
            model: response.model,
        })
    }
}

#[async_trait]
impl AiProvider for OpenAIProvider {
    async fn chat(&self, transcript: &Transcript) -> Result<Completion, AiProviderError> {
        let url = self.endpoint();
        let request_body = self.get_request(transcript);

        let response = self.make_request(&url, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ OpenAI API Error Response: {error_text}");
            return Err(Self::error_for_status(status, &error_text));
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        log::debug!("Received {} choices, {} tokens used", body.choices.len(), body.usage.total_tokens);
        Self::select_completion(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use crate::structs::transcript::message::Message;

    fn response(value: serde_json::Value) -> OpenAIResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_flattens_options() {
        let mut options = BTreeMap::new();
        options.insert("top_p".to_string(), json!(1));
        options.insert("temperature".to_string(), json!(0.2));
        let provider = OpenAIProvider::new("sk-test".to_string(), "gpt-4".to_string()).with_options(options.into());
        let transcript = Transcript::new(vec![Message::new("system", "Be brief."), Message::new("user", "Hi")]);

        let body = serde_json::to_value(provider.get_request(&transcript)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "Hi"}
                ],
                "top_p": 1,
                "temperature": 0.2
            })
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let provider = OpenAIProvider::new("k".to_string(), "gpt-4".to_string())
            .with_base_url("http://localhost:9000/v1/".to_string());
        assert_eq!(provider.endpoint(), "http://localhost:9000/v1/chat/completions");
    }

    #[test]
    fn test_select_completion_uses_last_choice() {
        let completion = OpenAIProvider::select_completion(response(json!({
            "model": "gpt-4-0613",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "second"}, "finish_reason": "length"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        })))
        .unwrap();

        assert_eq!(completion.content, "second");
        assert_eq!(completion.total_tokens, 15);
        assert_eq!(completion.finish_reason.as_deref(), Some("length"));
        assert_eq!(completion.model.as_deref(), Some("gpt-4-0613"));
    }

    #[test]
    fn test_select_completion_without_choices() {
        let err = OpenAIProvider::select_completion(response(json!({
            "choices": [],
            "usage": {"total_tokens": 3}
        })))
        .unwrap_err();
        assert!(matches!(err, AiProviderError::SerializationError(_)));
    }

    #[test]
    fn test_select_completion_with_null_content() {
        let err = OpenAIProvider::select_completion(response(json!({
            "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "stop"}],
            "usage": {"total_tokens": 3}
        })))
        .unwrap_err();
        assert!(matches!(err, AiProviderError::SerializationError(_)));
    }

    #[test]
    fn test_error_for_status() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        assert_eq!(
            OpenAIProvider::error_for_status(StatusCode::UNAUTHORIZED, body),
            AiProviderError::AuthenticationError("invalid_request_error: Incorrect API key provided".to_string())
        );
        assert!(matches!(
            OpenAIProvider::error_for_status(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            AiProviderError::RateLimitError(msg) if msg == "slow down"
        ));
        assert!(matches!(
            OpenAIProvider::error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "oops"),
            AiProviderError::ApiError(msg) if msg.contains("500") && msg.contains("oops")
        ));
    }
}
