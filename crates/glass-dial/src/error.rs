//! Error types for glass-dial.
//!
//! Only configuration loading and input parsing can fail. The calculator,
//! arc geometry and animator are total over their inputs.

use glass_core::ColorParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading dial configuration or parsing inputs.
#[derive(Debug, Error)]
pub enum DialError {
    /// IO error while reading a config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML config.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed YAML config.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A palette entry is not a valid hex color.
    #[error("invalid color for '{field}': {source}")]
    Color {
        /// Palette field name
        field: &'static str,
        /// Underlying parse error
        source: ColorParseError,
    },

    /// Config file extension is neither TOML nor YAML.
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Unknown list mode name.
    #[error("invalid mode '{0}' (expected planning, shopping, completed or archived)")]
    InvalidMode(String),
}

/// Result alias for glass-dial operations.
pub type Result<T> = std::result::Result<T, DialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dial_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "dial.toml");
        let err: DialError = io_err.into();
        assert!(matches!(err, DialError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_dial_error_color() {
        let err = DialError::Color {
            field: "danger",
            source: ColorParseError::InvalidLength,
        };
        assert_eq!(
            err.to_string(),
            "invalid color for 'danger': invalid hex string length (expected 6 or 8)"
        );
    }

    #[test]
    fn test_dial_error_unsupported_format() {
        let err = DialError::UnsupportedFormat(PathBuf::from("dial.ini"));
        assert_eq!(err.to_string(), "unsupported config format: dial.ini");
    }

    #[test]
    fn test_dial_error_invalid_mode() {
        let err = DialError::InvalidMode("paused".to_string());
        assert!(err.to_string().contains("'paused'"));
    }
}
