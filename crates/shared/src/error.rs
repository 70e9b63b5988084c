//! Error types for Launchpad

use thiserror::Error;

/// Error thrown when a config file has an extension we cannot parse
#[derive(Debug, Error)]
#[error("Unsupported config format '{extension}' for {path}. Supported: json, yaml, yml")]
pub struct UnsupportedConfigFormat {
    pub path: String,
    pub extension: String,
}

/// General Launchpad error type
#[derive(Debug, Error)]
pub enum LaunchpadError {
    #[error(transparent)]
    UnsupportedConfigFormat(#[from] UnsupportedConfigFormat),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, LaunchpadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message() {
        let err = LaunchpadError::Config("batchWorkers must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: batchWorkers must be at least 1"
        );
    }

    #[test]
    fn test_unsupported_format_message() {
        let err: LaunchpadError = UnsupportedConfigFormat {
            path: "launchpad.toml".to_string(),
            extension: "toml".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Unsupported config format 'toml' for launchpad.toml. Supported: json, yaml, yml"
        );
    }
}
