use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "PDFSTUDY_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `PDFSTUDY_LOG` names a file path; the terminal UI
/// owns stdout. Each run writes to `{path}.{timestamp}.{pid}`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok().filter(|path| !path.is_empty()) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// `{path}.{timestamp}.{pid}`, so concurrent runs never share a file.
pub fn unique_log_path(path: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", path, timestamp, pid)
}
