use clap::Parser;

fn main() {
    let cli = credmail::cli::Cli::parse();

    if let Err(err) = credmail::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
