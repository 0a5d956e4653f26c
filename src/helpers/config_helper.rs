use crate::config::constants::DEFAULT_OPENAI_BASE_URL;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_openai_base_url() -> String {
        DEFAULT_OPENAI_BASE_URL.to_string()
    }
}
