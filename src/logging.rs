use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "co2prep.log";

/// Initializes tracing with a human-readable console layer and a
/// daily-rotated JSON file under `logs/`, filtered to `co2prep=info`
/// plus whatever `RUST_LOG` adds.
pub fn init_logging() {
    let _ = fs::create_dir_all(LOG_DIR);

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("co2prep=info".parse().unwrap()))
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    // Keep the appender guard alive for the process lifetime so the
    // file buffer is flushed on exit.
    std::mem::forget(guard);
}
