//! Logging setup based on `tracing` / `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The default level applies to the given crate/binary name only; everything
/// else stays at `warn`. `RUST_LOG` overrides the whole filter when set.
///
/// # Arguments
///
/// * `name` - Crate or binary name the default level applies to
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"debug"`)
pub fn setup_logger(name: &str, default_level: &str) {
    // Binary names use '-' while module paths use '_'
    let module = name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{module}={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    tracing::debug!("logger initialized for {name}");
}
