//! Crate-wide error type, severity levels and terminal reporting.

use std::error::Error as StdError;
use std::fmt;

use crate::enums::ai_provider_error::AiProviderError;

/// Every failure a run can end with. None of them are recovered locally.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatfileError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        reason: String,
    },
    ApiError {
        provider: String,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },

    // Several validation failures reported together
    MultipleErrors {
        errors: Vec<ChatfileError>,
        context: String,
    },
}

impl ChatfileError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, line_number: Option<usize>, reason: &str, context: Option<&str>) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            line_number,
            reason: reason.to_string(),
            context: context.map(ToString::to_string),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    /// Folds a list of errors into one. A single error is returned as is.
    pub fn from_many(mut errors: Vec<Self>, context: &str) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::MultipleErrors {
                errors,
                context: context.to_string(),
            }),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } | Self::NetworkError { .. } | Self::ApiError { .. } => ErrorSeverity::Medium,
            Self::ValidationError { .. } | Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => errors
                .iter()
                .map(Self::severity)
                .max()
                .unwrap_or(ErrorSeverity::Low),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and YAML syntax")
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {ctx}"));
                }
                msg
            }
            Self::NetworkError { operation, reason } => {
                format!("Network error during {operation}: {reason}\n💡 Check your internet connection and the configured base URL")
            }
            Self::ApiError { provider, reason } => format!("{provider} request failed: {reason}"),
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::SystemError { operation, reason } => format!("System error during {operation}: {reason}"),
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {context}:\n");
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for ChatfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ChatfileError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for chatfile operations
pub type ChatfileResult<T> = Result<T, ChatfileError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message to stderr.
    pub fn handle_error(error: &ChatfileError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<AiProviderError> for ChatfileError {
    fn from(error: AiProviderError) -> Self {
        match error {
            AiProviderError::NetworkError(reason) => Self::NetworkError {
                operation: "chat completion".to_string(),
                reason,
            },
            other => Self::ApiError {
                provider: "OpenAI".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_many_unwraps_single_error() {
        let single = ChatfileError::system_error("read", "boom");
        let folded = ChatfileError::from_many(vec![single.clone()], "validation");
        assert_eq!(folded, Some(single));
        assert_eq!(ChatfileError::from_many(Vec::new(), "validation"), None);
    }

    #[test]
    fn test_multiple_errors_take_highest_severity() {
        let folded = ChatfileError::from_many(
            vec![
                ChatfileError::validation_error("model", "x", "supported model", None),
                ChatfileError::file_error("out.md", "write", "denied"),
            ],
            "validation",
        )
        .unwrap();

        assert_eq!(folded.severity(), ErrorSeverity::High);
        let message = folded.user_message();
        assert!(message.contains("1. Validation error for field 'model'"));
        assert!(message.contains("2. File operation 'write' failed"));
    }

    #[test]
    fn test_provider_network_error_maps_to_network_variant() {
        let error: ChatfileError = AiProviderError::NetworkError("connection refused".to_string()).into();
        assert_eq!(
            error,
            ChatfileError::NetworkError {
                operation: "chat completion".to_string(),
                reason: "connection refused".to_string(),
            }
        );

        let error: ChatfileError = AiProviderError::AuthenticationError("bad key".to_string()).into();
        assert!(matches!(error, ChatfileError::ApiError { .. }));
        assert!(error.to_string().contains("bad key"));
    }
}
