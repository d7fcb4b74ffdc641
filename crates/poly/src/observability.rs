use tracing_subscriber::EnvFilter;

/// Initializes tracing for binaries embedding the Poly crates.
///
/// Reads `RUST_LOG` for filtering and defaults to `info`. Call once at
/// startup; calling twice panics in `tracing_subscriber`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}
