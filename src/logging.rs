use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::{FormatTime, UtcTime};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Names the log file. Unset means no logging at all.
pub const LOG_ENV_VAR: &str = "COUNTRY_TABLE_LOG";

/// Initialize tracing with file output.
///
/// The UI owns the terminal, so logs only ever go to a file, and only when
/// `COUNTRY_TABLE_LOG` is set. `RUST_LOG` overrides the default `info`
/// filter. Returns the file actually written.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(Path::new(&base), timestamp, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_timer(log_timer())
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

/// RFC 3339 UTC timestamps on every log line.
fn log_timer() -> impl FormatTime {
    UtcTime::rfc_3339()
}

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
