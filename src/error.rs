//! Error handling for the About modal host
//!
//! The dialog itself never fails: missing inputs only reduce content. Errors
//! come from the surrounding application (terminal, configuration, I/O) and
//! are defined here with thiserror; anyhow is only used at the logging
//! bootstrap boundary.

use thiserror::Error;

/// Application result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Main application error enum
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON serialization errors (node snapshots)
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal/UI operation errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Application state errors
    #[error("State error: {message}")]
    State { message: String },

    /// Generic application errors
    #[error("Application error: {message}")]
    Application { message: String },
}

impl AppError {
    /// Create a new State error
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a new Application error
    pub fn application<S: Into<String>>(message: S) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Io(_) => false,
            AppError::Terminal(_) => false,
            AppError::Config(_) => false,
            AppError::Toml(_) => false,
            AppError::Serde(_) => true,
            AppError::State { .. } => true,
            AppError::Application { .. } => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Io(_) => ErrorSeverity::High,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Toml(_) => ErrorSeverity::High,
            AppError::Serde(_) => ErrorSeverity::Medium,
            AppError::Terminal(_) => ErrorSeverity::Critical,
            AppError::State { .. } => ErrorSeverity::Medium,
            AppError::Application { .. } => ErrorSeverity::Low,
        }
    }
}

/// Error severity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Convert severity to string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Low => "LOW",
            ErrorSeverity::Medium => "MEDIUM",
            ErrorSeverity::High => "HIGH",
            ErrorSeverity::Critical => "CRITICAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_errors_are_fatal() {
        let error = AppError::Terminal("no tty".to_string());
        assert!(!error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.severity().as_str(), "CRITICAL");
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse: Result<toml::Value, _> = toml::from_str("title = ");
        let error: AppError = parse.unwrap_err().into();
        assert!(matches!(error, AppError::Toml(_)));
        assert!(error.to_string().starts_with("TOML error"));
    }
}
