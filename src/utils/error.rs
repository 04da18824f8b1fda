use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfig { field: String },

    // Display carries the bare message: these strings are surfaced verbatim
    // in result envelopes.
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Precondition { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api(_) | Self::NotFound { .. } | Self::Http { .. } => ErrorCategory::Network,
            Self::Serialization(_) | Self::Validation { .. } | Self::Precondition { .. } => {
                ErrorCategory::Data
            }
            Self::TomlParse(_) | Self::InvalidConfigValue { .. } | Self::MissingConfig { .. } => {
                ErrorCategory::Config
            }
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Precondition { .. } => ErrorSeverity::Low,
            Self::Api(_) | Self::Http { .. } => ErrorSeverity::Medium,
            Self::NotFound { .. }
            | Self::Serialization(_)
            | Self::Validation { .. }
            | Self::Io(_) => ErrorSeverity::High,
            Self::TomlParse(_) | Self::InvalidConfigValue { .. } | Self::MissingConfig { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the fixture server is running and the base URL is reachable"
            }
            ErrorCategory::Data => "Inspect the fixture JSON against the documented schema",
            ErrorCategory::Config => "Fix the configuration flags or the TOML config file",
            ErrorCategory::Io => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load audit data: {}", self),
            ErrorCategory::Data => format!("Audit data is invalid: {}", self),
            ErrorCategory::Config => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File system problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_visible_messages_are_bare() {
        let err = DashError::precondition("Brand ID is required");
        assert_eq!(err.to_string(), "Brand ID is required");

        let err = DashError::validation("Invalid metrics data structure");
        assert_eq!(err.to_string(), "Invalid metrics data structure");
    }

    #[test]
    fn test_not_found_message_uses_resource_path() {
        let err = DashError::NotFound {
            path: "/data/brands.json".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found: /data/brands.json");
    }

    #[test]
    fn test_config_errors_are_critical() {
        let err = DashError::MissingConfig {
            field: "base_url".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Config);
    }
}
