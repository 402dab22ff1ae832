pub mod draft;

pub use draft::{EmailDraft, build_eml};
