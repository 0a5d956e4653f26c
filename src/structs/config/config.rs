use std::fmt;

use serde::Deserialize;

use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::completion_options::CompletionOptions;

#[derive(Deserialize, Clone, PartialEq)]
pub struct Config {
    pub openai_token: String,

    pub model: String,

    pub openai_completion_options: CompletionOptions,

    #[serde(default = "ConfigHelper::default_openai_base_url")]
    pub openai_base_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_token", &"<redacted>")
            .field("model", &self.model)
            .field("openai_completion_options", &self.openai_completion_options)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}
