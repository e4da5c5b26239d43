//! Configuration management for shell-render.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::Args;
use crate::output::{OutputPipeline, PagerStripper, DEFAULT_DISMISS_KEY, DEFAULT_TAB_SIZE};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderSection,
    /// Pager handling configuration.
    pub pager: PagerSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Rendering configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    /// Horizontal tab stop width.
    pub tab_size: usize,
    /// Remove disallowed control bytes after rendering.
    pub sanitize: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            sanitize: true,
        }
    }
}

/// Pager configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerSection {
    /// Remove pager prompts from rendered output.
    pub strip: bool,
    /// Remove the artifact left by a dismissal keystroke.
    pub strip_dismissal: bool,
    /// Custom prompt regex replacing the built-in `--More--` pattern.
    pub pattern: Option<String>,
    /// Keystroke that dismisses a paused pager.
    pub dismiss_key: String,
}

impl Default for PagerSection {
    fn default() -> Self {
        Self {
            strip: true,
            strip_dismissal: true,
            pattern: None,
            dismiss_key: DEFAULT_DISMISS_KEY.to_string(),
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(size) = std::env::var("SHELL_RENDER_TAB_SIZE") {
            if let Ok(size) = size.parse() {
                self.render.tab_size = size;
            }
        }

        if let Ok(flag) = std::env::var("SHELL_RENDER_SANITIZE") {
            if let Some(flag) = parse_flag(&flag) {
                self.render.sanitize = flag;
            }
        }

        if let Ok(level) = std::env::var("SHELL_RENDER_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(size) = args.tab_size {
            self.render.tab_size = size;
        }

        if args.no_sanitize {
            self.render.sanitize = false;
        }

        if args.no_pager {
            self.pager.strip = false;
            self.pager.strip_dismissal = false;
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env();
        config.apply_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Check values that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.tab_size == 0 {
            return Err(ConfigError::InvalidTabSize(self.render.tab_size));
        }
        if let Some(ref pattern) = self.pager.pattern {
            PagerStripper::with_pattern(pattern)?;
        }
        Ok(())
    }

    /// Build the output pipeline described by this configuration.
    pub fn to_pipeline(&self) -> Result<OutputPipeline, ConfigError> {
        self.validate()?;

        let mut pipeline = OutputPipeline::new()
            .tab_size(self.render.tab_size)
            .sanitize(self.render.sanitize)
            .strip_dismissal(self.pager.strip_dismissal)
            .dismiss_key(self.pager.dismiss_key.clone());

        pipeline = match (self.pager.strip, &self.pager.pattern) {
            (false, _) => pipeline.without_pager(),
            (true, Some(pattern)) => pipeline.pager(PagerStripper::with_pattern(pattern)?),
            (true, None) => pipeline,
        };

        Ok(pipeline)
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
    /// Tab stops must be at least one column apart.
    #[error("invalid tab size: {0} (must be at least 1)")]
    InvalidTabSize(usize),
    /// Custom pager pattern does not compile.
    #[error("invalid pager pattern: {0}")]
    PagerPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.tab_size, 8);
        assert!(config.render.sanitize);
        assert!(config.pager.strip);
        assert!(config.pager.strip_dismissal);
        assert!(config.pager.pattern.is_none());
        assert_eq!(config.pager.dismiss_key, " ");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "render": {
                "tab_size": 4,
                "sanitize": false
            },
            "pager": {
                "pattern": "<MORE>",
                "dismiss_key": "q"
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.render.tab_size, 4);
        assert!(!config.render.sanitize);
        assert_eq!(config.pager.pattern.as_deref(), Some("<MORE>"));
        assert_eq!(config.pager.dismiss_key, "q");
        assert!(config.pager.strip);
    }

    #[test]
    fn test_config_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "logging": { "level": "debug" } }"#)
            .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.render.tab_size, 8);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/shell-render.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let args = Args {
            tab_size: Some(2),
            no_sanitize: true,
            no_pager: true,
            log_level: Some("trace".to_string()),
            ..Args::default()
        };

        config.apply_args(&args);

        assert_eq!(config.render.tab_size, 2);
        assert!(!config.render.sanitize);
        assert!(!config.pager.strip);
        assert!(!config.pager.strip_dismissal);
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_validate_tab_size() {
        let mut config = Config::default();
        config.render.tab_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTabSize(0))
        ));
    }

    #[test]
    fn test_validate_pattern() {
        let mut config = Config::default();
        config.pager.pattern = Some("(broken".to_string());
        assert!(matches!(
            config.to_pipeline(),
            Err(ConfigError::PagerPattern(_))
        ));
    }

    #[test]
    fn test_to_pipeline() {
        let mut config = Config::default();
        config.render.tab_size = 4;
        let pipeline = config.to_pipeline().unwrap();
        assert_eq!(pipeline.normalizer().tab_size(), 4);
        assert!(pipeline.process("x --More--").saw_pager);

        config.pager.strip = false;
        let pipeline = config.to_pipeline().unwrap();
        assert!(!pipeline.process("x --More--").saw_pager);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"tab_size\""));
        assert!(json.contains("\"dismiss_key\""));
    }
}
