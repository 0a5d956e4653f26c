use std::fmt;
use std::path::PathBuf;

/// What a successful run reports on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub model: String,
    pub total_tokens: u64,
    pub output: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Done! Model used: {}. Tokens used: {}.", self.model, self.total_tokens)
    }
}
