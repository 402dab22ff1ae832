pub mod loader;
pub mod record;
pub mod store;

use std::io;

use thiserror::Error;

pub use loader::{read_rows, source_name};
pub use record::{Field, Record};
pub use store::ProfileStore;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("{0}")]
    Io(String),
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

/// Search miss, carrying every known last name for display.
#[derive(Debug, Error)]
#[error("no profile found for: {query}\navailable names: {}", .candidates.join(", "))]
pub struct NotFound {
    pub query: String,
    pub candidates: Vec<String>,
}
