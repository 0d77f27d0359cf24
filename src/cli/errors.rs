//! CLI-specific error types
//!
//! Any CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::http_server::ConfigError;
use crate::rest_api::RestError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, listener)
    IoError,
    /// Runtime or server failed to start
    BootFailed,
    /// Lookup found nothing
    NotFound,
    /// Store failure
    Internal,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "BOOKSHELF_CLI_CONFIG_ERROR",
            Self::IoError => "BOOKSHELF_CLI_IO_ERROR",
            Self::BootFailed => "BOOKSHELF_CLI_BOOT_FAILED",
            Self::NotFound => "BOOKSHELF_CLI_NOT_FOUND",
            Self::Internal => "BOOKSHELF_CLI_INTERNAL",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<RestError> for CliError {
    fn from(e: RestError) -> Self {
        let code = match e {
            RestError::BookNotFound(_) => CliErrorCode::NotFound,
            RestError::Repository(_) => CliErrorCode::Internal,
        };
        Self::new(code, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("bad port");
        assert_eq!(err.to_string(), "BOOKSHELF_CLI_CONFIG_ERROR: bad port");
    }

    #[test]
    fn test_from_rest_error() {
        let err = CliError::from(RestError::BookNotFound("9".to_string()));
        assert_eq!(err.code(), &CliErrorCode::NotFound);
        assert_eq!(err.message(), "Book not found: 9");
    }

    #[test]
    fn test_from_config_error() {
        let err = CliError::from(ConfigError::Invalid("port must be > 0".to_string()));
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_CONFIG_ERROR");
    }
}
