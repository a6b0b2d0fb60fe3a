// src/signals.rs

//! Termination-signal relay from launcher to child.
//!
//! Two process-wide listeners (SIGINT, SIGTERM) are registered once at
//! startup and never deregistered. Each received signal is relayed to the
//! child unchanged: no acknowledgement, no retry, no escalation to SIGKILL.

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{debug, warn};

use crate::errors::{LaunchError, Result};

/// The two termination signals the launcher recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardedSignal {
    /// Interrupt request (SIGINT, Ctrl-C).
    Interrupt,
    /// Polite terminate request (SIGTERM).
    Terminate,
}

impl ForwardedSignal {
    fn as_os_signal(self) -> Signal {
        match self {
            ForwardedSignal::Interrupt => Signal::SIGINT,
            ForwardedSignal::Terminate => Signal::SIGTERM,
        }
    }
}

/// Register the SIGINT/SIGTERM listeners and spawn the relay tasks.
///
/// Registering the streams replaces the default signal disposition, so the
/// launcher itself does not die on receipt; it keeps waiting for the child
/// and exits through the normal exit path once the child terminates.
pub fn spawn_forwarders(pid: u32) -> Result<()> {
    let mut interrupt = signal(SignalKind::interrupt()).map_err(LaunchError::SignalSetup)?;
    let mut terminate = signal(SignalKind::terminate()).map_err(LaunchError::SignalSetup)?;

    tokio::spawn(async move {
        while interrupt.recv().await.is_some() {
            relay(pid, ForwardedSignal::Interrupt);
        }
    });

    tokio::spawn(async move {
        while terminate.recv().await.is_some() {
            relay(pid, ForwardedSignal::Terminate);
        }
    });

    Ok(())
}

/// Send one signal to the child, fire-and-forget.
///
/// A failed send (typically the child is already gone) is logged and
/// otherwise ignored.
pub fn relay(pid: u32, sig: ForwardedSignal) {
    debug!(pid, signal = ?sig, "relaying signal to child");
    if let Err(err) = kill(Pid::from_raw(pid as i32), sig.as_os_signal()) {
        warn!(pid, signal = ?sig, error = %err, "failed to relay signal to child");
    }
}
