//! Error types for loading configuration.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when loading [`Options`](crate::Options).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML or JSON content is malformed.
    #[error("failed to parse {}: {message}", location(.path.as_deref()))]
    Parse {
        /// Source file, when loading from disk.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// The file extension is not one of the supported formats.
    #[error("unsupported configuration format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn location(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "configuration".to_string(),
    }
}

impl ConfigError {
    pub(crate) fn parse(path: Option<&Path>, message: impl ToString) -> Self {
        ConfigError::Parse {
            path: path.map(Path::to_path_buf),
            message: message.to_string(),
        }
    }
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_without_path() {
        let err = ConfigError::parse(None, "bad indent");
        assert_eq!(err.to_string(), "failed to parse configuration: bad indent");
    }

    #[test]
    fn test_parse_error_with_path() {
        let err = ConfigError::parse(Some(Path::new("theme.yaml")), "bad indent");
        assert_eq!(err.to_string(), "failed to parse theme.yaml: bad indent");
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("theme.toml"),
        };
        assert!(err.to_string().contains("theme.toml"));
    }
}
