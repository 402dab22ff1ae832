use std::path::{Path, PathBuf};

use tracing::info;

use crate::profiles::{self, LoadError, NotFound, ProfileStore, Record};
use crate::template::{self, RenderError, TemplateRenderer};

/// Everything one user works with at a time: the loaded roster, where it
/// came from, and the template being filled.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: ProfileStore,
    source_name: String,
    source_path: Option<PathBuf>,
    renderer: TemplateRenderer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            renderer: TemplateRenderer::new(template),
            ..Self::default()
        }
    }

    /// Replaces the roster with the contents of `path` and returns the number
    /// of profiles. On failure the previous roster stays in place.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, LoadError> {
        let rows = profiles::read_rows(path)?;
        let store = ProfileStore::load(rows)?;

        self.store = store;
        self.source_name = profiles::source_name(path);
        self.source_path = Some(path.to_path_buf());

        info!(path = %path.display(), profiles = self.store.len(), "loaded profiles");
        Ok(self.store.len())
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn current(&self) -> Option<&Record> {
        self.store.current()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Record> {
        self.store.advance()
    }

    pub fn find_by_last_name(&self, query: &str) -> Result<&Record, NotFound> {
        self.store.find_by_last_name(query)
    }

    pub fn template(&self) -> &str {
        self.renderer.template()
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.renderer.set_template(template);
    }

    pub fn reset_template(&mut self) {
        self.renderer = TemplateRenderer::default();
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    /// Full email text for `record`: its address, a blank line, then the
    /// filled template.
    pub fn render(&self, record: &Record) -> Result<String, RenderError> {
        let body = self.renderer.render(record, &self.source_name)?;
        Ok(template::compose(record, &body))
    }
}
