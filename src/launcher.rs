// src/launcher.rs

//! Child process spawning and exit observation.
//!
//! The launcher owns exactly one child for its whole lifetime. Standard
//! streams are fully inherited: the launcher never reads or writes them
//! itself.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::debug;

use crate::errors::{LaunchError, Result};

/// How the child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by a signal (number given) before reporting a code.
    Signaled(i32),
}

impl ChildExit {
    /// Map the child's termination to the launcher's own exit code.
    ///
    /// A signal-killed child carries no code and maps to 0, matching the
    /// behaviour of the original wrapper.
    pub fn exit_code(self) -> i32 {
        match self {
            ChildExit::Exited(code) => code,
            ChildExit::Signaled(_) => 0,
        }
    }
}

/// Exclusive owner of the one child process the launcher runs.
///
/// The handle is never shared or cloned; [`Launcher::wait`] consumes it, so
/// there is no ambiguity about who may signal or wait on the child.
pub struct Launcher {
    child: Child,
    command: String,
}

impl Launcher {
    /// Spawn the child process with stdin/stdout/stderr connected directly
    /// to the launcher's own streams.
    ///
    /// `env` of `None` inherits the parent environment unmodified;
    /// `Some(map)` replaces it wholesale.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<I, S>(
        command: &str,
        args: I,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(vars) = env {
            cmd.env_clear().envs(vars);
        }

        let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            command: command.to_string(),
            source,
        })?;

        debug!(command, pid = child.id(), "child process spawned");

        Ok(Self {
            child,
            command: command.to_string(),
        })
    }

    /// OS process id of the running child.
    pub fn pid(&self) -> Option<u32> {
        self.child.id()
    }

    /// Suspend until the child terminates.
    ///
    /// Consumes the handle: once the exit status is observed there is
    /// nothing left to signal or wait on.
    pub async fn wait(mut self) -> Result<ChildExit> {
        let status = self.child.wait().await.map_err(LaunchError::Wait)?;

        let exit = match status.code() {
            Some(code) => ChildExit::Exited(code),
            None => ChildExit::Signaled(signal_number(&status)),
        };

        debug!(command = %self.command, ?exit, "child process terminated");
        Ok(exit)
    }
}

#[cfg(unix)]
fn signal_number(status: &std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().unwrap_or(0)
}

#[cfg(not(unix))]
fn signal_number(_status: &std::process::ExitStatus) -> i32 {
    0
}
