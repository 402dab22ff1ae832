use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cli::ExportArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::mail::{EmailDraft, build_eml};
use crate::session::Session;

#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub directory: String,
    pub files: Vec<String>,
}

pub fn run(ctx: &AppContext, args: ExportArgs) -> AppResult<()> {
    let session = ctx.open_roster(&args.file, args.source.template.as_deref())?;
    let files = write_drafts(&session, &args.out, ctx.settings.from_header())?;

    let result = ExportResult {
        directory: args.out.display().to_string(),
        files,
    };
    let text = format!("wrote {} drafts to {}", result.files.len(), result.directory);
    ctx.output.emit(&text, &result)
}

/// Renders every profile and writes one `.eml` draft per profile. Nothing
/// is written if any profile fails to render.
pub fn write_drafts(session: &Session, dir: &Path, from: Option<&str>) -> AppResult<Vec<String>> {
    let mut drafts = Vec::new();
    for (index, record) in session.store().iter().enumerate() {
        let body = session.renderer().render(record, session.source_name())?;
        let draft = EmailDraft::from_rendered(&record.email, &body, from);
        drafts.push((draft_file_name(index, &record.last_name), build_eml(&draft)));
    }

    fs::create_dir_all(dir)?;

    let mut files = Vec::with_capacity(drafts.len());
    for (name, message) in drafts {
        fs::write(dir.join(&name), message)?;
        files.push(name);
    }

    info!(count = files.len(), dir = %dir.display(), "drafts exported");
    Ok(files)
}

fn draft_file_name(index: usize, last_name: &str) -> String {
    let stem = last_name
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_')
        .collect::<String>();
    let stem = if stem.is_empty() { "profile" } else { &stem };
    format!("{:03}-{stem}.eml", index + 1)
}
