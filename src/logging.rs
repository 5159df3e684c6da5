// src/logging.rs
//! Console and file logging. Every event goes to stdout and to a daily
//! `chatbot.<date>.log` file in the configured directory.

use std::path::Path;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "multilingual_chatbot=info,tower_http=info";

/// Daily-rotated log file in `dir`, created along with `dir` if missing.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("chatbot")
        .filename_suffix("log")
        .build(dir)
}

/// Install the global subscriber. Keep the returned guard alive for as long
/// as the process logs; dropping it flushes and stops the file writer.
pub fn init(log_dir: &Path) -> Result<WorkerGuard, InitError> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(log_dir)?);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_appender_creates_directory_and_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");

        let mut appender = file_appender(&dir).unwrap();
        writeln!(appender, "engine ready").unwrap();
        appender.flush().unwrap();

        let files: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);

        let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("chatbot.") && name.ends_with(".log"), "{name}");
        let content = std::fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("engine ready"));
    }
}
