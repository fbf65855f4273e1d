use anyhow::Result;
use std::path::{Path, PathBuf};

/// Well-known locations for config and logs. `HOSTDECK_BASE_PATH`
/// overrides the per-user config directory, for containers.
pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        if let Ok(base) = std::env::var("HOSTDECK_BASE_PATH") {
            return Ok(Self::from_base(PathBuf::from(base)));
        }
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("hostdeck");
        Ok(Self::from_base(base_dir))
    }

    pub fn from_base(base: PathBuf) -> Self {
        Self {
            log_dir: base.join("logs"),
            config_dir: base,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("hostdeck.log")
    }
}
