use crate::config::LoggingConfig;
use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output and an optional JSON file.
///
/// `RUST_LOG` wins over the configured filter when it is set.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let console_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let file_layer = config.directory.as_ref().and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: could not create log directory {}: {}", dir.display(), e);
            return None;
        }

        // Daily rotation, written off the request path
        let file_appender = tracing_appender::rolling::daily(dir, "book-catalog.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes on drop; logging lives for the whole process
        std::mem::forget(guard);
        Some(fmt::layer().json().with_writer(non_blocking_writer))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
}
