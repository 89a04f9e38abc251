use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read dictionary '{}': {source}", .path.display())]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dictionary '{}': {message}", .path.display())]
    DictionaryFormat { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Dictionary,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定程序的退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AnagramError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnagramError::DictionaryLoad { .. } | AnagramError::DictionaryFormat { .. } => {
                ErrorCategory::Dictionary
            }
            AnagramError::ConfigError { .. }
            | AnagramError::ConfigValidationError { .. }
            | AnagramError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AnagramError::SerializationError(_) => ErrorCategory::Output,
            AnagramError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 沒有字典就無法產生任何結果
            ErrorCategory::Dictionary => ErrorSeverity::Critical,
            ErrorCategory::System => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnagramError::DictionaryLoad { path, .. } => format!(
                "Make sure '{}' exists, or point --dictionary (or ANAGRAMS_DICTIONARY) at a JSON word list",
                path.display()
            ),
            AnagramError::DictionaryFormat { .. } => {
                "The dictionary must be a JSON object mapping each word to a truthy value, e.g. {\"cat\": 1}"
                    .to_string()
            }
            AnagramError::ConfigError { .. } | AnagramError::ConfigValidationError { .. } => {
                "Check the TOML configuration file for syntax errors and unknown sections".to_string()
            }
            AnagramError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            AnagramError::SerializationError(_) => {
                "Try again with --format text".to_string()
            }
            AnagramError::IoError(_) => "Check file permissions and available disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Dictionary => format!("Could not load the word list: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not render the results: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnagramError>;
