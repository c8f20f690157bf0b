//! Logging Infrastructure
//!
//! Structured logging setup: console output, mirrored to a daily rolling
//! file when the log directory exists.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // stdout + file
    if let Some(dir) = log_dir
        && dir.exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "restaurant-server");
        let _ = subscriber
            .with_writer(std::io::stdout.and(file_appender))
            .try_init();
        return;
    }

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_output_when_dir_exists() {
        let dir = tempfile::tempdir().unwrap();
        init_logger_with_file(Some("info"), Some(dir.path()));
        tracing::info!("rolling file written");

        let file = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .find(|e| e.file_name().to_string_lossy().starts_with("restaurant-server"))
            .expect("log file created");
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("rolling file written"));
    }
}
