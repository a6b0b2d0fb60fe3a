// src/errors.rs

//! Crate-wide error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// The child process could not be created at all (missing executable,
    /// permission denied, OS resource exhaustion). Fatal: there is no retry
    /// policy and no fallback.
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("failed to register signal handler: {0}")]
    SignalSetup(#[source] std::io::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LaunchError>;
