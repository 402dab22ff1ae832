use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(profile, json)?;

    match command {
        Command::List(args) => commands::list::run(&ctx, args),
        Command::Render(args) => commands::render::run(&ctx, args),
        Command::Export(args) => commands::export::run(&ctx, args),
        Command::Template(args) => commands::template::run(&ctx, args.command),
        Command::Shell(args) => commands::shell::run(&ctx, args),
    }
}
