use std::io;

use crate::cli::ShellArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::shell;

pub fn run(ctx: &AppContext, args: ShellArgs) -> AppResult<()> {
    let mut session = ctx.session(args.source.template.as_deref())?;

    if let Some(file) = &args.file {
        let count = session.load_file(file)?;
        println!("Loaded {count} profiles");
    }

    let stdin = io::stdin();
    shell::run(&mut session, &ctx.clipboard, stdin.lock(), io::stdout())
}
