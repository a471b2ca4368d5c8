use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, error, event, span};
use tugwatch::{App, Settings, cli::Args, cli::execute};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(Level::from(&settings.log_level))
        .with_writer(std::io::stderr)
        .init();

    let span = span!(Level::TRACE, "tugwatch");
    let _enter = span.enter();

    event!(
        Level::INFO,
        "starting tugwatch in {} environment...",
        settings.environment.as_ref()
    );

    let app = match App::build(&settings).await {
        Ok(app) => app,
        Err(e) => {
            error!("failed to load reports: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    match execute(&app, args.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("command failed: {e:?}");
            ExitCode::FAILURE
        }
    }
}
