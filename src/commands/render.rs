use serde::Serialize;
use tracing::info;

use crate::cli::RenderArgs;
use crate::clipboard::Clipboard;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::profiles::Record;
use crate::session::Session;

#[derive(Debug, Clone, Serialize)]
pub struct RenderedEmail {
    pub position: usize,
    pub last_name: String,
    pub to: String,
    pub text: String,
    pub copied: bool,
}

pub fn run(ctx: &AppContext, args: RenderArgs) -> AppResult<()> {
    let session = ctx.open_roster(&args.file, args.source.template.as_deref())?;
    let record = select(&session, args.last_name.as_deref(), args.index)?;
    let text = session.render(record)?;

    if args.copy {
        ctx.clipboard.copy(text.trim())?;
        info!(last_name = %record.last_name, "email copied to clipboard");
    }

    let rendered = RenderedEmail {
        position: position_of(&session, record),
        last_name: record.last_name.clone(),
        to: record.email.clone(),
        text,
        copied: args.copy,
    };
    ctx.output.emit(&rendered.text, &rendered)
}

/// Picks the record by last name, by 1-based position, or the first one.
pub fn select<'a>(
    session: &'a Session,
    last_name: Option<&str>,
    index: Option<usize>,
) -> AppResult<&'a Record> {
    if let Some(query) = last_name {
        return Ok(session.find_by_last_name(query)?);
    }

    let total = session.store().len();
    if total == 0 {
        return Err(AppError::InvalidInput("roster has no profiles".to_string()));
    }

    match index {
        None => session
            .current()
            .ok_or_else(|| AppError::InvalidInput("roster has no profiles".to_string())),
        Some(0) => Err(AppError::InvalidInput(
            "--index must be greater than 0".to_string(),
        )),
        Some(position) => session.store().get(position - 1).ok_or_else(|| {
            AppError::InvalidInput(format!("--index {position} is past the last profile ({total})"))
        }),
    }
}

fn position_of(session: &Session, record: &Record) -> usize {
    session
        .store()
        .iter()
        .position(|candidate| candidate.last_name == record.last_name)
        .map_or(0, |index| index + 1)
}
