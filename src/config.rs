use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::theme::Theme;

pub const DEFAULT_DURATION_SECS: u64 = 60;
pub const DEFAULT_NUMBER_OF_WORDS: usize = 200;
pub const MIN_DURATION_SECS: u64 = 1;
pub const MAX_DURATION_SECS: u64 = 3600;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub duration_secs: u64,
    pub number_of_words: usize,
    pub language: String,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            number_of_words: DEFAULT_NUMBER_OF_WORDS,
            language: "english".to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Pulls a hand-edited duration back into the range the CLI accepts
    pub fn clamped(self) -> Self {
        let duration_secs = self
            .duration_secs
            .clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        if duration_secs != self.duration_secs {
            warn!(
                stored = self.duration_secs,
                used = duration_secs,
                "duration_secs out of range"
            );
        }
        Self {
            duration_secs,
            ..self
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg.clamped(),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// In-memory store for tests and sessions that should not touch disk
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    saved: std::cell::RefCell<Option<Config>>,
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Config {
        self.saved.borrow().clone().unwrap_or_default()
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        *self.saved.borrow_mut() = Some(cfg.clone());
        Ok(())
    }
}
