/// Models the completion request may target.
pub const SUPPORTED_MODELS: &[&str] = &["text-davinci-003", "gpt-3.5-turbo-16k", "gpt-3.5-turbo", "gpt-4"];

pub const DEFAULT_CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_INPUT_FILE: &str = "input.md";
pub const DEFAULT_OUTPUT_FILE: &str = "output.md";

/// Prefix of a line that opens a new message block, e.g. `__user`.
pub const ROLE_MARKER_PREFIX: &str = "__";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Options the request builder sets itself; they cannot be passed through.
pub const RESERVED_COMPLETION_OPTIONS: &[&str] = &["model", "messages"];

pub const TOP_P_OPTION: &str = "top_p";
pub const STREAM_OPTION: &str = "stream";

pub const FINISH_REASON_LENGTH: &str = "length";

pub const SPINNER_INTERVAL_MS: u64 = 150;

pub fn is_supported_model(model: &str) -> bool {
    SUPPORTED_MODELS.contains(&model)
}
