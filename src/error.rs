//! Error types for shell-render.
//!
//! Rendering itself never fails; these cover configuration, argument
//! parsing and I/O around the engine.

use thiserror::Error;

use crate::cli::ArgsError;
use crate::config::ConfigError;

/// Main error type for shell-render operations.
#[derive(Error, Debug)]
pub enum ShellRenderError {
    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command-line arguments could not be parsed.
    #[error("argument error: {0}")]
    Args(#[from] ArgsError),

    /// A global tracing subscriber was already installed.
    #[error("logging init error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for shell-render operations.
pub type Result<T> = std::result::Result<T, ShellRenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ShellRenderError = io_err.into();
        assert!(matches!(err, ShellRenderError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_config_error_display() {
        let err: ShellRenderError = ConfigError::InvalidTabSize(0).into();
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("tab size"));
    }

    #[test]
    fn test_args_error_display() {
        let err: ShellRenderError = ArgsError::InvalidValue("tab-size", "x".into()).into();
        assert!(err.to_string().contains("--tab-size"));
    }

    #[test]
    fn test_logging_error_conversion() {
        let _ = crate::logging::try_init();
        let err: ShellRenderError = crate::logging::try_init().unwrap_err().into();
        assert!(matches!(err, ShellRenderError::Logging(_)));
        assert!(err.to_string().contains("logging init error"));
    }
}
