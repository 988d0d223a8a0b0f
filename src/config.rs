use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::countdown::{MAX_FOCUS_MINUTES, MIN_FOCUS_MINUTES};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub focus_minutes: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { focus_minutes: 25 }
    }
}

impl Config {
    /// Clamp persisted values that were edited by hand out of range.
    pub fn sanitized(mut self) -> Self {
        self.focus_minutes = self.focus_minutes.clamp(MIN_FOCUS_MINUTES, MAX_FOCUS_MINUTES);
        self
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "fokus") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("fokus_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg.sanitized();
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
