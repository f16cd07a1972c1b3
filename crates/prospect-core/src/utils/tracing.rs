use std::io;
use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. The filter comes from `RUST_LOG`
/// (default `info`).
///
/// Without `log_file` events go to stderr; stdout is reserved for the stdio
/// MCP transport and command output.
pub fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log file path has no file name: {}", path.display()),
            )
        })?;
        std::fs::create_dir_all(dir)?;

        let file_appender = rolling::never(dir, file_name);
        let subscriber = tracing_subscriber::registry()
            .with(
                fmt::Layer::new()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(
                fmt::Layer::default()
                    .with_writer(io::stderr)
                    .with_target(true),
            )
            .with(filter);
        tracing::subscriber::set_global_default(subscriber)
    };

    result.map_err(io::Error::other)?;

    tracing::debug!(
        target: "prospect::utils::tracing",
        file = ?log_file,
        "Tracing initialized. Filter configured via RUST_LOG env var."
    );
    Ok(())
}
