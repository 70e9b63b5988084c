//! Configuration types for Launchpad

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{LaunchpadError, UnsupportedConfigFormat};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "LAUNCHPAD_CONFIG";

/// Launchpad configuration (launchpad.json / launchpad.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchpadConfig {
    /// Default tracing filter; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Rockets created when the binary runs without a subcommand
    #[serde(default)]
    pub seed_rockets: Vec<String>,

    /// Concurrent creations allowed by `launchpad batch`
    #[serde(default = "default_batch_workers")]
    pub batch_workers: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_batch_workers() -> usize {
    8
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            seed_rockets: Vec::new(),
            batch_workers: default_batch_workers(),
        }
    }
}

impl LaunchpadConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = std::fs::read_to_string(path)?;
        let config: Self = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => {
                return Err(UnsupportedConfigFormat {
                    path: path.display().to_string(),
                    extension,
                }
                .into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, else from `$LAUNCHPAD_CONFIG`, else defaults
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(env_path) => Self::from_file(Path::new(&env_path)),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.batch_workers == 0 {
            return Err(LaunchpadError::Config(
                "batchWorkers must be at least 1".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(LaunchpadError::Config(
                "logLevel must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
