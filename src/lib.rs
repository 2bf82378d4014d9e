//! faceswap-launcher - starts the face-swap inference engine and its
//! serving gateway.
//!
//! The engine runs detached in the background. The gateway runs in the
//! foreground, and its exit code becomes the launcher's exit code.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod launcher;
pub mod output;
pub mod provider;

use clap::Parser;
use cli::{Cli, Command, ConfigAction};
use config::{
    Config, OutputMode, load_config_file, load_default_config, load_explicit_config,
    resolve_config_path, save_config, validate_config,
};
use launcher::{LaunchPlan, Launcher};
use output::{PlanPayload, ProvidersPayload, ResultType, emit_json_result};
use provider::ExecutionProvider;
use std::path::Path;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the launcher CLI.
///
/// Returns the exit code the process should terminate with.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.launch.verbose, cli.launch.quiet);

    // An existing file is left alone by `config init`, even if it does not parse
    if matches!(
        cli.command,
        Some(Command::Config {
            action: ConfigAction::Init
        })
    ) && report_existing_config(cli.launch.config.as_deref())?
    {
        return Ok(0);
    }

    // Load configuration, then apply command-line overrides
    let creating = matches!(
        cli.command,
        Some(Command::Config {
            action: ConfigAction::Init | ConfigAction::Path
        })
    );
    let mut config = load_config(cli.launch.config.as_deref(), creating)?;
    cli.launch.apply(&mut config);
    validate_config(&config)?;

    if let Some(command) = cli.command {
        handle_command(command, &config, cli.launch.config.as_deref())?;
        return Ok(0);
    }

    install_interrupt_handler();

    Launcher::new(LaunchPlan::from_config(&config)).run()
}

/// Load the configuration file.
///
/// A file named with `--config` must exist unless it is about to be created.
fn load_config(explicit: Option<&Path>, creating: bool) -> Result<Config> {
    match explicit {
        Some(path) if creating => load_config_file(path),
        Some(path) => load_explicit_config(path),
        None => load_default_config(),
    }
}

/// Print a notice and return `true` if the config file already exists.
#[allow(clippy::print_stdout)]
fn report_existing_config(explicit: Option<&Path>) -> Result<bool> {
    let path = resolve_config_path(explicit)?;
    if path.exists() {
        println!("Configuration file already exists: {}", path.display());
        return Ok(true);
    }
    Ok(false)
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // The gateway owns stdout; launcher logs go to stderr.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Keep the launcher alive on Ctrl+C.
///
/// The terminal delivers the interrupt to the gateway as well; the launcher
/// waits for it to exit and reports its code. The engine is not signalled.
fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {
        warn!("Interrupt received, waiting for serving gateway to exit");
    }) {
        warn!("Failed to install Ctrl+C handler: {e}");
    }
}

fn handle_command(command: Command, config: &Config, explicit: Option<&Path>) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config, explicit),
        Command::Plan { output_mode } => handle_plan_command(config, output_mode),
        Command::Providers { output_mode } => handle_providers_command(output_mode),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, config: &Config, explicit: Option<&Path>) -> Result<()> {
    let path = resolve_config_path(explicit)?;

    match action {
        ConfigAction::Init => {
            save_config(config, &path)?;
            info!("Created configuration file");
            println!("Created configuration file: {}", path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let contents =
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{contents}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

#[allow(clippy::print_stdout)]
fn handle_plan_command(config: &Config, output_mode: OutputMode) -> Result<()> {
    let plan = LaunchPlan::from_config(config);

    if output_mode.is_structured() {
        return emit_json_result(&PlanPayload {
            result_type: ResultType::Plan,
            plan: &plan,
        });
    }

    println!("Background (not waited on):");
    println!("  {}", plan.engine);
    println!("Foreground (exit code is propagated):");
    println!("  {}", plan.gateway);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn handle_providers_command(output_mode: OutputMode) -> Result<()> {
    if output_mode.is_structured() {
        return emit_json_result(&ProvidersPayload {
            result_type: ResultType::Providers,
            providers: ExecutionProvider::ALL
                .into_iter()
                .map(ExecutionProvider::metadata)
                .collect(),
        });
    }

    println!("Execution providers for the inference engine:");
    println!();
    for provider in ExecutionProvider::ALL {
        let meta = provider.metadata();
        println!("  {:<10} {}", meta.id, meta.description);
    }
    println!();
    println!("Select with --execution-providers <id>[,<id>...] (default: cuda).");
    println!("Availability depends on how the engine was installed; the launcher");
    println!("passes the selection through without checking it.");
    Ok(())
}
