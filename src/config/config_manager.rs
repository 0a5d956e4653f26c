use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::constants::{
    is_supported_model, RESERVED_COMPLETION_OPTIONS, STREAM_OPTION, SUPPORTED_MODELS, TOP_P_OPTION,
};
use crate::errors::{ChatfileError, ChatfileResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    /// Reads the YAML file at `path` and validates it.
    pub fn load(path: &Path) -> ChatfileResult<Config> {
        log::debug!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|e| ChatfileError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| ChatfileError::config_file_error(&path.display().to_string(), &e.to_string()))?;

        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn validate_config(config: &Config) -> ChatfileResult<()> {
        let mut errors = Vec::new();

        if !is_supported_model(&config.model) {
            errors.push(ChatfileError::validation_error(
                "model",
                &config.model,
                &format!("Unknown model: {}", config.model),
                Some(&format!("Use one of: {}", SUPPORTED_MODELS.join(", "))),
            ));
        }

        let options = &config.openai_completion_options;

        match options.get(TOP_P_OPTION) {
            Some(top_p) if Self::is_one(top_p) => {}
            top_p => errors.push(ChatfileError::validation_error(
                "openai_completion_options.top_p",
                &top_p.map_or_else(|| "<missing>".to_string(), ToString::to_string),
                "Multiple choices output is not supported: set top_p = 1.",
                Some("Set top_p: 1"),
            )),
        }

        for key in RESERVED_COMPLETION_OPTIONS {
            if options.contains_key(key) {
                errors.push(ChatfileError::config_error(
                    &format!("'{key}' is set from the top-level configuration and cannot be passed as a completion option"),
                    Some(&format!("openai_completion_options.{key}")),
                    Some("Remove it from openai_completion_options"),
                ));
            }
        }

        if options.get(STREAM_OPTION).and_then(Value::as_bool) == Some(true) {
            errors.push(ChatfileError::validation_error(
                "openai_completion_options.stream",
                "true",
                "Streaming responses are not supported",
                Some("Remove stream or set it to false"),
            ));
        }

        match ChatfileError::from_many(errors, "configuration validation") {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    #[allow(clippy::float_cmp)]
    fn is_one(value: &Value) -> bool {
        value.as_f64() == Some(1.0)
    }
}
