use chrono::Local;
use env_logger::{Builder, Target};
use log::{LevelFilter, Record};
use std::{
    ffi::OsString,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Environment variable naming a file that receives the log instead of stderr.
pub const LOG_FILE_ENV: &str = "MEMKIT_LOG_FILE";

/// Logger initialization used by the binary entrypoint.
///
/// Logs go to stderr through `env_logger` (filtered by `RUST_LOG`) so that
/// stdout only carries prompts and results. When `MEMKIT_LOG_FILE` is set
/// the log is appended to that file instead.
pub fn init_logging() {
    match log_file_path(std::env::var_os(LOG_FILE_ENV)) {
        Some(path) => {
            if let Err(err) = init_file_logger(&path) {
                eprintln!("Failed to initialize file logger at '{}': {err}", path.display());
                env_logger::init();
            }
        }
        None => env_logger::init(),
    }
}

/// An unset or blank variable keeps logging on stderr.
fn log_file_path(value: Option<OsString>) -> Option<PathBuf> {
    value
        .filter(|raw| !raw.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}

/// One file log line: `<local time> <LEVEL> <target>: <message>`.
fn log_line(timestamp: &str, record: &Record) -> String {
    format!(
        "{timestamp} {:<5} {}: {}",
        record.level(),
        record.target(),
        record.args()
    )
}

fn init_file_logger(path: &Path) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    Builder::new()
        .format(|buf, record| {
            let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
            writeln!(buf, "{}", log_line(&now, record))
        })
        .target(Target::Pipe(Box::new(file)))
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    log::debug!("Logging to {}", path.display());
    Ok(())
}
