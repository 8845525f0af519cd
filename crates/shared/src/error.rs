//! Application-wide error types.
//!
//! Report generation itself never fails; these errors cover the host around it
//! (configuration, reading requests, decoding JSON).

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Input could not be decoded into a report request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::Io(_) => 74,
            Self::InvalidInput(_) => 65,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the stable error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.to_string())
        } else {
            Self::InvalidInput(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Config(String::new()), 78, "CONFIG_ERROR")]
    #[case(AppError::Io(String::new()), 74, "IO_ERROR")]
    #[case(AppError::InvalidInput(String::new()), 65, "INVALID_INPUT")]
    #[case(AppError::Internal(String::new()), 70, "INTERNAL_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] exit: u8, #[case] code: &str) {
        assert_eq!(err.exit_code(), exit);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(AppError::Io("msg".into()).to_string(), "I/O error: msg");
        assert_eq!(
            AppError::InvalidInput("msg".into()).to_string(),
            "Invalid input: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_json_syntax_error_is_invalid_input() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::InvalidInput(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let app: AppError = err.into();
        assert_eq!(app.error_code(), "IO_ERROR");
        assert!(app.to_string().contains("missing.json"));
    }
}
