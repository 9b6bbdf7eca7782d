//! Bringing a pinned application to the front.
//!
//! The workspace launcher goes through `open(1)`: `open -b` activates the
//! application when it is already running and launches it otherwise. When
//! the bundle identifier is not registered with Launch Services it retries by
//! display name.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::model::mapping::AppMapping;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not run `open` for {bundle_id}")]
    Spawn {
        bundle_id: String,
        #[source]
        source: io::Error,
    },
    #[error("no application found for {bundle_id} ({name})")]
    NotFound { bundle_id: String, name: String },
}

pub trait AppLauncher {
    fn activate_or_launch(&self, app: &AppMapping) -> Result<(), LaunchError>;
}

/// Runs external commands on behalf of [`Workspace`].
pub trait System {
    /// Runs `program` to completion and reports whether it exited successfully.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<bool>;
}

pub struct Process;

impl System for Process {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<bool> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(status.success())
    }
}

pub struct Workspace<S: System = Process> {
    system: S,
}

impl Workspace<Process> {
    pub fn new() -> Self { Self::new_with(Process) }
}

impl Default for Workspace<Process> {
    fn default() -> Self { Self::new() }
}

impl<S: System> Workspace<S> {
    pub fn new_with(system: S) -> Self { Workspace { system } }
}

const OPEN: &str = "open";

impl<S: System> AppLauncher for Workspace<S> {
    #[instrument(skip(self), fields(bundle_id = %app.bundle_id))]
    fn activate_or_launch(&self, app: &AppMapping) -> Result<(), LaunchError> {
        let spawn_err = |source| LaunchError::Spawn {
            bundle_id: app.bundle_id.clone(),
            source,
        };

        if self.system.run(OPEN, &["-b", app.bundle_id.as_str()]).map_err(spawn_err)? {
            debug!("activated by bundle id");
            return Ok(());
        }

        warn!(name = %app.name, "bundle id not found, falling back to application name");
        if !app.name.is_empty()
            && self.system.run(OPEN, &["-a", app.name.as_str()]).map_err(spawn_err)?
        {
            info!(name = %app.name, "activated by name");
            return Ok(());
        }

        Err(LaunchError::NotFound {
            bundle_id: app.bundle_id.clone(),
            name: app.name.clone(),
        })
    }
}

/// Logs what would be launched without touching the system.
#[derive(Debug, Default)]
pub struct DryRun;

impl AppLauncher for DryRun {
    fn activate_or_launch(&self, app: &AppMapping) -> Result<(), LaunchError> {
        info!(bundle_id = %app.bundle_id, name = %app.name, "dry run: would activate");
        Ok(())
    }
}
