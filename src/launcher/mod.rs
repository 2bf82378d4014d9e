//! Launching the inference engine and the serving gateway.
//!
//! The engine is started detached and never waited on. The gateway is
//! started attached, and its exit code becomes the launcher's exit code.

mod runner;
mod spawner;
mod spec;
mod status;

pub use runner::Launcher;
pub use spawner::{OsSpawner, Spawner};
pub use spec::{LaunchPlan, ProcessSpec};
pub use status::exit_code_of;
