pub mod default;
pub mod placeholder;
pub mod renderer;

use thiserror::Error;

pub use default::DEFAULT_TEMPLATE;
pub use placeholder::Placeholder;
pub use renderer::{TemplateRenderer, compose};

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum RenderError {
    #[error("unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
    #[error("unclosed '{{' at byte {offset}")]
    UnclosedBrace { offset: usize },
    #[error("single '}}' at byte {offset}; write '}}}}' for a literal brace")]
    StrayBrace { offset: usize },
}
