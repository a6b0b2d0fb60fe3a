#![cfg(unix)]

use std::error::Error;
use std::time::Duration;

use pylaunch::launcher::{ChildExit, Launcher};
use pylaunch::signals::{self, ForwardedSignal};
use tokio::time::sleep;

type TestResult = Result<(), Box<dyn Error>>;

// Shells that trap the signal and exit with a distinctive code, so the test
// can tell the relayed signal arrived (and arrived as the right kind).
const TRAP_TERM: &str = "trap 'exit 42' TERM; while :; do sleep 0.1; done";
const TRAP_INT: &str = "trap 'exit 43' INT; while :; do sleep 0.1; done";

#[tokio::test]
async fn relayed_sigterm_reaches_the_child() -> TestResult {
    let child = Launcher::start("/bin/sh", ["-c", TRAP_TERM], None)?;
    let pid = child.pid().ok_or("child has no pid")?;

    // Give the shell a moment to install its trap.
    sleep(Duration::from_millis(300)).await;
    signals::relay(pid, ForwardedSignal::Terminate);

    assert_eq!(child.wait().await?, ChildExit::Exited(42));
    Ok(())
}

#[tokio::test]
async fn relayed_sigint_reaches_the_child() -> TestResult {
    let child = Launcher::start("/bin/sh", ["-c", TRAP_INT], None)?;
    let pid = child.pid().ok_or("child has no pid")?;

    sleep(Duration::from_millis(300)).await;
    signals::relay(pid, ForwardedSignal::Interrupt);

    assert_eq!(child.wait().await?, ChildExit::Exited(43));
    Ok(())
}

#[tokio::test]
async fn untrapped_sigterm_kills_child_and_maps_to_zero() -> TestResult {
    let child = Launcher::start("sleep", ["30"], None)?;
    let pid = child.pid().ok_or("child has no pid")?;

    sleep(Duration::from_millis(100)).await;
    signals::relay(pid, ForwardedSignal::Terminate);

    let exit = child.wait().await?;
    assert_eq!(exit, ChildExit::Signaled(15));
    assert_eq!(exit.exit_code(), 0);
    Ok(())
}

#[tokio::test]
async fn relay_to_a_terminated_child_is_ignored() -> TestResult {
    let child = Launcher::start("/bin/sh", ["-c", "exit 0"], None)?;
    let pid = child.pid().ok_or("child has no pid")?;
    assert_eq!(child.wait().await?, ChildExit::Exited(0));

    // The child has been reaped; relaying must not panic.
    signals::relay(pid, ForwardedSignal::Terminate);
    Ok(())
}
