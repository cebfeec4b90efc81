use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Request failed: {0}")]
    AjaxError(#[from] AjaxError),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

/// 儲存層錯誤。取代原本吞掉例外只回傳 bool 的作法。
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("quota of {limit} bytes exceeded while writing '{key}'")]
    QuotaExceeded { key: String, limit: usize },

    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("storage IO failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AjaxError {
    #[error("request could not be sent: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    #[error("request body could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("response body is not the expected JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl AjaxError {
    /// 非 2xx 回應時保留的原始 body
    pub fn body(&self) -> Option<&str> {
        match self {
            AjaxError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AjaxError::Status { status, .. } => Some(*status),
            AjaxError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KitError::ConfigError { .. }
            | KitError::ConfigValidationError { .. }
            | KitError::InvalidConfigValueError { .. }
            | KitError::MissingConfigError { .. } => ErrorCategory::Configuration,
            KitError::StorageError(_) => ErrorCategory::Storage,
            KitError::AjaxError(_) => ErrorCategory::Network,
            KitError::SerializationError(_) | KitError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            KitError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KitError::ValidationError { .. } => ErrorSeverity::Low,
            KitError::AjaxError(_) => ErrorSeverity::Medium,
            KitError::StorageError(StorageError::Corrupted { .. })
            | KitError::StorageError(StorageError::QuotaExceeded { .. }) => ErrorSeverity::Medium,
            KitError::IoError(_) | KitError::StorageError(StorageError::Io(_)) => {
                ErrorSeverity::Critical
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KitError::ConfigError { message } => format!("Configuration problem: {}", message),
            KitError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            KitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            KitError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            KitError::StorageError(e) => format!("Could not access the store: {}", e),
            KitError::AjaxError(AjaxError::Status { status, .. }) => {
                format!("The server rejected the request (HTTP {})", status)
            }
            KitError::AjaxError(e) => format!("The request failed: {}", e),
            KitError::ValidationError { message } => message.clone(),
            KitError::SerializationError(e) => format!("Invalid JSON: {}", e),
            KitError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the TOML config file and environment variables",
            ErrorCategory::Storage => "Check the store file, or clear the affected key",
            ErrorCategory::Network => "Check the URL and that the server is reachable",
            ErrorCategory::Data => "Check the input value format",
            ErrorCategory::System => "Check file permissions and free disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_drives_categories() {
        let e = KitError::ValidationError {
            message: "bad".to_string(),
        };
        assert_eq!(e.category(), ErrorCategory::Data);
        assert_eq!(e.severity(), ErrorSeverity::Low);

        let e = KitError::from(StorageError::QuotaExceeded {
            key: "k".to_string(),
            limit: 10,
        });
        assert_eq!(e.category(), ErrorCategory::Storage);
        assert_eq!(e.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_ajax_status_keeps_body() {
        let e = AjaxError::Status {
            status: 404,
            body: "{\"error\":\"nope\"}".to_string(),
        };
        assert_eq!(e.status(), Some(404));
        assert_eq!(e.body(), Some("{\"error\":\"nope\"}"));
        assert!(KitError::from(e)
            .user_friendly_message()
            .contains("HTTP 404"));
    }
}
