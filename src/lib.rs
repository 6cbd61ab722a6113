pub mod config;
pub mod defaults;
pub mod demo;
pub mod error;
pub mod merge;
pub mod model;
pub mod parser;
pub mod portfolio;
pub mod source;
pub mod tables;
pub mod utils;

/// `RUST_LOG`-driven subscriber, `info` when unset.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}
