pub mod app;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod mail;
pub mod output;
pub mod profiles;
pub mod session;
pub mod shell;
pub mod template;

use cli::Cli;
use error::AppResult;

pub use session::Session;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
