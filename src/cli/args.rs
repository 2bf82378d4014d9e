//! CLI argument definitions.

use super::validators::{parse_port, parse_program, parse_service_id};
use crate::config::{Config, OutputMode};
use crate::provider::ExecutionProvider;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Start the face-swap inference engine in the background and the serving
/// gateway in the foreground.
#[derive(Debug, Parser)]
#[command(name = "faceswap-launcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run. Without one, the services are launched.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Overrides for the launched services.
    #[command(flatten)]
    pub launch: LaunchArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Print the command lines a launch would run, without running them.
    Plan {
        /// Output mode.
        #[arg(long, value_enum, default_value_t)]
        output_mode: OutputMode,
    },
    /// List execution providers the engine can be asked to use.
    Providers {
        /// Output mode.
        #[arg(long, value_enum, default_value_t)]
        output_mode: OutputMode,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create configuration file with the effective settings.
    Init,
    /// Display effective configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Overrides applied on top of the configuration file.
#[derive(Debug, Default, Args)]
pub struct LaunchArgs {
    /// Use this configuration file instead of the platform default.
    #[arg(long, global = true, env = "FACESWAP_LAUNCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port the serving gateway binds.
    #[arg(short, long, global = true, value_parser = parse_port, env = "FACESWAP_LAUNCHER_PORT")]
    pub port: Option<u16>,

    /// Service to serve, as `module:Class`.
    #[arg(long, global = true, value_parser = parse_service_id, env = "FACESWAP_LAUNCHER_SERVICE")]
    pub service: Option<String>,

    /// Execution providers for the inference engine (comma-separated: cpu,cuda,tensorrt,...).
    #[arg(
        short = 'e',
        long,
        global = true,
        value_delimiter = ',',
        env = "FACESWAP_LAUNCHER_EXECUTION_PROVIDERS"
    )]
    pub execution_providers: Option<Vec<ExecutionProvider>>,

    /// Inference engine executable.
    #[arg(long, global = true, value_parser = parse_program, env = "FACESWAP_LAUNCHER_ENGINE_PROGRAM")]
    pub engine_program: Option<String>,

    /// Serving gateway executable.
    #[arg(long, global = true, value_parser = parse_program, env = "FACESWAP_LAUNCHER_GATEWAY_PROGRAM")]
    pub gateway_program: Option<String>,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LaunchArgs {
    /// Apply the overrides that were given to `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.gateway.port = port;
        }
        if let Some(ref service) = self.service {
            config.gateway.service.clone_from(service);
        }
        if let Some(ref providers) = self.execution_providers {
            config.engine.execution_providers.clone_from(providers);
        }
        if let Some(ref program) = self.engine_program {
            config.engine.program.clone_from(program);
        }
        if let Some(ref program) = self.gateway_program {
            config.gateway.program.clone_from(program);
        }
    }
}
