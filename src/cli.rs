use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "credmail",
    version,
    about = "Fill a credentials email template for each student in a CSV roster"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Settings profile to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List(ListArgs),
    Render(RenderArgs),
    Export(ExportArgs),
    Template(TemplateArgs),
    Shell(ShellArgs),
}

#[derive(Debug, Args)]
pub struct TemplateSource {
    #[arg(long, help = "Read the email template from a file")]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(help = "CSV roster file")]
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(help = "CSV roster file")]
    pub file: PathBuf,
    #[command(flatten)]
    pub source: TemplateSource,
    #[arg(long, conflicts_with = "index", help = "Render the profile with this last name")]
    pub last_name: Option<String>,
    #[arg(long, help = "Render the profile at this 1-based position")]
    pub index: Option<usize>,
    #[arg(long, help = "Also copy the email to the clipboard")]
    pub copy: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(help = "CSV roster file")]
    pub file: PathBuf,
    #[command(flatten)]
    pub source: TemplateSource,
    #[arg(long, help = "Directory to write .eml drafts into")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    Show(TemplateSource),
    Check(TemplateSource),
}

#[derive(Debug, Args)]
pub struct ShellArgs {
    #[arg(help = "CSV roster file to load on start")]
    pub file: Option<PathBuf>,
    #[command(flatten)]
    pub source: TemplateSource,
}
