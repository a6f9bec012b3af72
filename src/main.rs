use armover::cmd::{self, Cli};
use armover::settings::Settings;
use armover::{logging, ui};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A missing .env is fine; the variables may come from the shell.
    let _ = dotenvy::dotenv();

    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            ui::error(format!("Failed to load settings: {err}"));
            return ExitCode::FAILURE;
        }
    };
    settings.debug |= cli.debug;

    let _guard = logging::init(settings.debug);

    match cmd::run(cli.command.unwrap_or_default(), settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ui::error(err);
            ExitCode::FAILURE
        }
    }
}
