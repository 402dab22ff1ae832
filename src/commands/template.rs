use serde::Serialize;

use crate::cli::{TemplateCommand, TemplateSource};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateCheck {
    pub valid: bool,
    pub placeholders: Vec<String>,
}

pub fn run(ctx: &AppContext, command: TemplateCommand) -> AppResult<()> {
    match command {
        TemplateCommand::Show(source) => show(ctx, source),
        TemplateCommand::Check(source) => check(ctx, source),
    }
}

fn show(ctx: &AppContext, source: TemplateSource) -> AppResult<()> {
    let session = ctx.session(source.template.as_deref())?;
    let template = session.template();
    ctx.output
        .emit(template, &serde_json::json!({ "template": template }))
}

fn check(ctx: &AppContext, source: TemplateSource) -> AppResult<()> {
    let session = ctx.session(source.template.as_deref())?;
    let placeholders = session
        .renderer()
        .placeholders()?
        .into_iter()
        .map(|placeholder| placeholder.to_string())
        .collect::<Vec<_>>();

    let text = if placeholders.is_empty() {
        "template is valid; it uses no placeholders".to_string()
    } else {
        format!("template is valid; placeholders: {}", placeholders.join(", "))
    };
    let result = TemplateCheck {
        valid: true,
        placeholders,
    };
    ctx.output.emit(&text, &result)
}
