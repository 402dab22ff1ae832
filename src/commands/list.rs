use crate::cli::ListArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::profiles::Record;
use crate::session::Session;

pub fn run(ctx: &AppContext, args: ListArgs) -> AppResult<()> {
    let mut session = Session::new();
    session.load_file(&args.file)?;
    let records = session.store().iter().collect::<Vec<_>>();

    if ctx.output.mode() == OutputMode::Text {
        if records.is_empty() {
            println!("0 profiles");
            return Ok(());
        }

        for (index, record) in records.iter().enumerate() {
            println!("{}", format_entry(index, record));
        }

        return Ok(());
    }

    let text = format!("{} profiles", records.len());
    ctx.output.emit(&text, &records)
}

fn format_entry(index: usize, record: &Record) -> String {
    let email = if record.email.is_empty() {
        "(no email)"
    } else {
        record.email.as_str()
    };
    format!(
        "{}. {}, {} <{}>",
        index + 1,
        record.last_name,
        record.first_name,
        email
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::clipboard::CommandClipboard;
    use crate::config::{AppPaths, Settings};
    use crate::output::Output;

    #[test]
    fn formats_one_based_entry() {
        let record = Record {
            first_name: "Alex".to_string(),
            last_name: "Lee".to_string(),
            email: String::new(),
            username: "alee".to_string(),
            password: "p@ss".to_string(),
        };

        assert_eq!(format_entry(0, &record), "1. Lee, Alex <(no email)>");
    }

    #[test]
    fn listing_ignores_configured_template() {
        let dir = tempfile::tempdir().expect("tempdir");
        let roster = dir.path().join("roster.csv");
        fs::write(
            &roster,
            "First Name,Last Name,Email,Username,Password\nAlex,Lee,alex@example.com,alee,p\n",
        )
        .expect("write roster");

        let settings = Settings {
            template_file: Some(dir.path().join("missing-template.txt")),
            ..Settings::default()
        };
        let ctx = AppContext {
            profile: "default".to_string(),
            paths: AppPaths::under(dir.path().to_path_buf()),
            clipboard: CommandClipboard::from_settings(&settings),
            settings,
            output: Output::new(true),
        };

        run(&ctx, ListArgs { file: roster }).expect("list needs no template");
    }
}
