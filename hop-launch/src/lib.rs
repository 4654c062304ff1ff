//! Platform launch strategies shared by `hop` and `echoloop`.

mod launch;
mod platform;

use std::io;

use thiserror::Error;

pub use launch::{launch, Launched};
pub use platform::{for_host, for_os, Opener};

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Install a stderr `tracing` subscriber filtered by `env_var`, defaulting to `warn`.
pub fn init_logging(env_var: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env(env_var).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
