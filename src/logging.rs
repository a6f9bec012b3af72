use directories::ProjectDirs;
use std::{fs, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

const LOG_ENV: &str = "ARMOVER_LOG";

pub fn log_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "armover", "armover")
        .map(|dirs| dirs.data_local_dir().join("armover.log"))
}

/// Logs go to a file so they never interleave with prompts. The returned
/// guard flushes on drop and must live until exit.
pub fn init(debug: bool) -> Option<WorkerGuard> {
    let path = log_path()?;

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = match fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Logging disabled, cannot open {}: {err}", path.display());
            return None;
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(file);

    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!("armover {} started", env!("CARGO_PKG_VERSION"));
    tracing::debug!("log file: {}", path.display());

    Some(guard)
}
