//! Process creation.
//!
//! The [`Spawner`] trait is the seam between the launch sequence and the
//! operating system. [`OsSpawner`] is the real implementation; tests drive
//! the sequence with a recording double.

use super::spec::ProcessSpec;
use super::status::exit_code_of;
use crate::error::{Error, Result};
use std::io;
use std::process::{Child, Stdio};
use tracing::debug;

/// Starts external processes.
pub trait Spawner {
    /// Start a process without waiting for it.
    ///
    /// Returns the child's process id. The caller never waits on the child
    /// and never inspects its exit status.
    fn spawn_detached(&mut self, spec: &ProcessSpec) -> io::Result<u32>;

    /// Start a process and block until it terminates.
    ///
    /// Returns the child's exit code as a shell would report it.
    fn run_attached(&mut self, spec: &ProcessSpec) -> Result<i32>;
}

/// Spawner backed by `std::process`.
///
/// On unix, detached children get their own process group and so do not
/// receive the terminal's interrupt. They are kept only so that any that
/// have already exited can be reaped when the spawner is dropped. Children
/// still running at that point are left running.
#[derive(Debug, Default)]
pub struct OsSpawner {
    detached: Vec<Child>,
}

impl OsSpawner {
    /// Create a spawner with no tracked children.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Spawner for OsSpawner {
    fn spawn_detached(&mut self, spec: &ProcessSpec) -> io::Result<u32> {
        let mut command = spec.to_command();
        // Background jobs of a non-interactive shell read from /dev/null.
        command.stdin(Stdio::null());

        // Own process group, so a terminal Ctrl+C reaches only the gateway.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command.spawn()?;
        let pid = child.id();
        self.detached.push(child);
        Ok(pid)
    }

    fn run_attached(&mut self, spec: &ProcessSpec) -> Result<i32> {
        let mut child = spec
            .to_command()
            .spawn()
            .map_err(|e| Error::ProcessSpawn {
                program: spec.program.clone(),
                source: e,
            })?;

        debug!(pid = child.id(), "Waiting for '{}'", spec.program);

        let status = child.wait().map_err(|e| Error::ProcessWait {
            program: spec.program.clone(),
            source: e,
        })?;

        Ok(exit_code_of(status))
    }
}

impl Drop for OsSpawner {
    fn drop(&mut self) {
        for child in &mut self.detached {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!(pid = child.id(), "Background process had exited: {status}");
                }
                Ok(None) => {
                    debug!(pid = child.id(), "Leaving background process running");
                }
                Err(e) => {
                    debug!(pid = child.id(), "Could not query background process: {e}");
                }
            }
        }
    }
}
