use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hostaway: Option<HostawayConfig>,
    #[serde(default)]
    pub seed: SeedOptions,
}

/// Credentials and endpoint for the Hostaway reviews API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostawayConfig {
    pub enabled: bool,
    pub account_id: String,
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on the remote fetch; a stalled upstream must not
    /// block ingestion of the seed set.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Local seed set: the built-in reviews, or a JSON file with an array of
/// raw review records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.hostfully.com/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(hostaway) = &self.hostaway {
            if hostaway.enabled {
                if hostaway.account_id.is_empty() {
                    return Err(anyhow::anyhow!(
                        "Hostaway is enabled but account_id is not configured"
                    ));
                }
                if hostaway.api_key.is_empty() || hostaway.api_key == PLACEHOLDER_API_KEY {
                    return Err(anyhow::anyhow!(
                        "Hostaway is enabled but api_key is not configured"
                    ));
                }
                if hostaway.timeout_secs == 0 {
                    return Err(anyhow::anyhow!("timeout_secs must be positive"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_seed_only_and_valid() {
        let config = Config::default();
        assert!(config.hostaway.is_none());
        assert!(config.seed.enabled);
        assert!(config.seed.file.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn toml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            hostaway: Some(HostawayConfig {
                enabled: true,
                account_id: "61148".into(),
                api_key: "secret".into(),
                base_url: default_base_url(),
                timeout_secs: 10,
            }),
            seed: SeedOptions::default(),
        };
        config.save_to_file(&path).unwrap();
        let loaded = Config::load_from_file(&path).unwrap();
        let hostaway = loaded.hostaway.unwrap();
        assert_eq!(hostaway.account_id, "61148");
        assert_eq!(hostaway.timeout_secs, 10);
        assert!(loaded.seed.enabled);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let config: Config = toml::from_str(
            r#"
            [hostaway]
            enabled = true
            account_id = "61148"
            api_key = "secret"
            "#,
        )
        .unwrap();
        let hostaway = config.hostaway.unwrap();
        assert_eq!(hostaway.base_url, default_base_url());
        assert_eq!(hostaway.timeout_secs, 10);
    }

    #[test]
    fn placeholder_api_key_fails_validation() {
        let config = Config {
            hostaway: Some(HostawayConfig {
                enabled: true,
                account_id: "61148".into(),
                api_key: PLACEHOLDER_API_KEY.into(),
                base_url: default_base_url(),
                timeout_secs: 10,
            }),
            seed: SeedOptions::default(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn disabled_hostaway_skips_credential_checks() {
        let config = Config {
            hostaway: Some(HostawayConfig {
                enabled: false,
                account_id: String::new(),
                api_key: String::new(),
                base_url: default_base_url(),
                timeout_secs: 10,
            }),
            seed: SeedOptions::default(),
        };
        config.validate().unwrap();
    }
}
