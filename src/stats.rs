use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::countdown::Completion;

/// Accumulated session statistics. Serialized with camelCase keys to stay
/// compatible with the `focusStatistics` entry of earlier builds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub sessions_completed: u64,
    /// Total focused minutes across all completed sessions.
    pub total_focus_time: u64,
}

impl Statistics {
    /// Account a naturally completed session.
    pub fn record(&mut self, completion: &Completion) {
        self.sessions_completed += 1;
        self.total_focus_time += completion.focus_minutes as u64;
    }

    pub fn summary(&self) -> String {
        format!(
            "{} session{} · {} min focused",
            self.sessions_completed,
            if self.sessions_completed == 1 { "" } else { "s" },
            self.total_focus_time
        )
    }
}

pub trait StatsStore {
    fn load(&self) -> Statistics;
    fn save(&self, stats: &Statistics) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
}

impl FileStatsStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::stats_path().unwrap_or_else(|| PathBuf::from("fokus_statistics.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileStatsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsStore for FileStatsStore {
    fn load(&self) -> Statistics {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(stats) = serde_json::from_slice::<Statistics>(&bytes) {
                return stats;
            }
        }
        Statistics::default()
    }

    fn save(&self, stats: &Statistics) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(stats).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
