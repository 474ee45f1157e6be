use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_SERVER_URL: &str = "http://localhost:3000";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Global configuration at ~/.config/evcat/config.toml
///
/// The `EVCAT_SERVER` environment variable overrides the configured URL.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            server_url: default_server_url(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("evcat");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Ok(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            _ => GlobalConfig::default(),
        };

        if let Ok(url) = std::env::var("EVCAT_SERVER") {
            if !url.is_empty() {
                config.server_url = url;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_url() {
        let config: GlobalConfig =
            toml::from_str(r#"server_url = "http://example.com:4000""#).unwrap();
        assert_eq!(config.server_url, "http://example.com:4000");
    }

    #[test]
    fn missing_field_falls_back_to_default() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }
}
