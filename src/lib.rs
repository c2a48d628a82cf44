pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod milestones;
pub mod rates;
pub mod records;
pub mod roster;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// Note: This function can only be called once per process; the embedding
/// application should call it during startup before any cost calculations.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
