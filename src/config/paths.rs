use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "credmail";

#[derive(Debug, Clone)]
pub struct AppPaths {
    profiles_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        let paths = Self::under(config_root.join(APP_DIR));
        fs::create_dir_all(&paths.profiles_dir)?;
        Ok(paths)
    }

    /// Layout rooted at an explicit directory, without touching the disk.
    pub fn under(config_dir: PathBuf) -> Self {
        Self {
            profiles_dir: config_dir.join("profiles"),
        }
    }

    pub fn settings_file(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(format!("{profile}.json"))
    }

    pub fn profiles_dir(&self) -> &Path {
        &self.profiles_dir
    }
}
