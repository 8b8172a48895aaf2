use tracing_subscriber::EnvFilter;

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["lukashian", "lukashian_calendar", "lukashian_solar"];

/// Default level when `RUST_LOG` is unset.
const DEFAULT_LEVEL: &str = "warn";

/// Initialize tracing on stderr.
///
/// Every workspace crate logs at `warn` unless the `RUST_LOG` env var is
/// set, in which case it takes over entirely. Stdout stays reserved for the
/// program's own output.
pub fn init() {
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={DEFAULT_LEVEL}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
