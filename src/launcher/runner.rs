//! The launch sequence.

use super::spawner::{OsSpawner, Spawner};
use super::spec::LaunchPlan;
use crate::error::Result;
use tracing::{debug, info, warn};

/// Starts the inference engine in the background, then runs the serving
/// gateway in the foreground.
#[derive(Debug)]
pub struct Launcher<S = OsSpawner> {
    plan: LaunchPlan,
    spawner: S,
}

impl Launcher<OsSpawner> {
    /// Create a launcher that spawns real OS processes.
    pub fn new(plan: LaunchPlan) -> Self {
        Self::with_spawner(plan, OsSpawner::new())
    }
}

impl<S: Spawner> Launcher<S> {
    /// Create a launcher with a custom spawner.
    pub fn with_spawner(plan: LaunchPlan, spawner: S) -> Self {
        Self { plan, spawner }
    }

    /// Consume the launcher and return its spawner.
    pub fn into_spawner(self) -> S {
        self.spawner
    }

    /// Run the launch sequence and return the gateway's exit code.
    ///
    /// The engine is requested to start strictly before the gateway. There
    /// is no readiness check between the two. An engine that fails to
    /// start is reported as a warning and never prevents the gateway from
    /// starting. The call blocks until the gateway terminates.
    pub fn run(&mut self) -> Result<i32> {
        let engine = &self.plan.engine;
        info!("Starting inference engine: {engine}");
        match self.spawner.spawn_detached(engine) {
            Ok(pid) => debug!(pid, "Inference engine started"),
            Err(e) => warn!(
                "Inference engine '{}' failed to start: {e}; continuing with gateway",
                engine.program
            ),
        }

        let gateway = &self.plan.gateway;
        info!("Starting serving gateway: {gateway}");
        let code = self.spawner.run_attached(gateway)?;

        if code == 0 {
            info!("Serving gateway exited");
        } else {
            warn!("Serving gateway exited with code {code}");
        }

        Ok(code)
    }
}
