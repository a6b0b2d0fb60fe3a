// src/lib.rs

pub mod errors;
pub mod launcher;
pub mod logging;
#[cfg(unix)]
pub mod signals;

use tracing::info;

use crate::launcher::{ChildExit, Launcher};

/// Fixed child invocation: the interpreter running the application entry
/// point, with no arguments of its own.
const CHILD_COMMAND: &str = "python";
const CHILD_ARGS: &[&str] = &["main.py"];

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - spawning the fixed child command (environment inherited unmodified)
/// - SIGINT / SIGTERM relay to the child
/// - waiting for the child and mapping its status to our own exit code
pub async fn run() -> anyhow::Result<i32> {
    info!("Starting Python Flask application...");

    let child = Launcher::start(CHILD_COMMAND, CHILD_ARGS, None)?;

    // Receiving a signal must not end the launcher; it exits only once the
    // child's own termination is observed below.
    #[cfg(unix)]
    if let Some(pid) = child.pid() {
        signals::spawn_forwarders(pid)?;
    }

    let exit = child.wait().await?;
    match exit {
        ChildExit::Exited(code) => info!(exit_code = code, "Python process exited"),
        ChildExit::Signaled(signo) => {
            info!(signal = signo, "Python process killed by signal")
        }
    }

    Ok(exit.exit_code())
}
