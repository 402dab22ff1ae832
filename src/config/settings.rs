use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// External program that receives copied text on stdin.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CopyCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CopyCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub template_file: Option<PathBuf>,
    #[serde(default)]
    pub copy_command: Option<CopyCommand>,
    #[serde(default)]
    pub from: Option<String>,
}

impl Settings {
    pub fn template_file(&self) -> Option<&Path> {
        self.template_file.as_deref()
    }

    pub fn from_header(&self) -> Option<&str> {
        self.from
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Config(format!("invalid settings file {}: {err}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load(dir.path().join("absent.json")).expect("defaults");

        assert!(settings.template_file().is_none());
        assert!(settings.copy_command.is_none());
    }

    #[test]
    fn reads_partial_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("default.json");
        fs::write(
            &path,
            r#"{ "copy_command": { "program": "wl-copy" }, "from": "  Spencer <s@upei.ca> " }"#,
        )
        .expect("write settings");

        let settings = load(path).expect("settings");
        assert_eq!(settings.copy_command, Some(CopyCommand::new("wl-copy", &[])));
        assert_eq!(settings.from_header(), Some("Spencer <s@upei.ca>"));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("default.json");
        fs::write(&path, "{ not json").expect("write settings");

        assert!(matches!(load(path), Err(AppError::Config(_))));
    }
}
