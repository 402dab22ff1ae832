use std::fs;
use std::path::Path;

use tracing::debug;

use crate::clipboard::CommandClipboard;
use crate::config::{self, AppPaths, Settings};
use crate::error::{AppError, AppResult};
use crate::output::Output;
use crate::session::Session;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub paths: AppPaths,
    pub settings: Settings,
    pub clipboard: CommandClipboard,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        let clipboard = CommandClipboard::from_settings(&settings);
        let output = Output::new(json);

        debug!(profile = %profile, "context ready");

        Ok(Self {
            profile,
            paths,
            settings,
            clipboard,
            output,
        })
    }

    /// Session seeded with the template from `--template`, then the profile's
    /// `template_file`, then the built-in default.
    pub fn session(&self, template: Option<&Path>) -> AppResult<Session> {
        let path = template.or_else(|| self.settings.template_file());
        match path {
            Some(path) => Ok(Session::with_template(read_template(path)?)),
            None => Ok(Session::new()),
        }
    }

    pub fn open_roster(&self, file: &Path, template: Option<&Path>) -> AppResult<Session> {
        let mut session = self.session(template)?;
        session.load_file(file)?;
        Ok(session)
    }
}

/// Reads a template file the way the editor saves one: surrounding
/// whitespace trimmed, empty text rejected.
pub fn read_template(path: &Path) -> AppResult<String> {
    let raw = fs::read_to_string(path)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "template file {} is empty",
            path.display()
        )));
    }

    debug!(path = %path.display(), "template read");
    Ok(trimmed.to_string())
}
