pub mod export;
pub mod list;
pub mod render;
pub mod shell;
pub mod template;
