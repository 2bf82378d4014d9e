//! Command lines for the two launched services.

use crate::config::{Config, EngineConfig, GatewayConfig};
use crate::constants::{engine, gateway};
use serde::Serialize;
use std::fmt;
use std::process::Command;

/// One external command line: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSpec {
    /// Executable name or path, resolved through `PATH` by the OS.
    pub program: String,
    /// Arguments, not including the program.
    pub args: Vec<String>,
}

impl ProcessSpec {
    /// Create a spec with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Command line for the inference engine:
    /// `<program> [<script>] <mode> --execution-providers <provider>...`.
    pub fn engine(config: &EngineConfig) -> Self {
        let mut spec = Self::new(&config.program);
        if !config.script.is_empty() {
            spec = spec.arg(&config.script);
        }
        spec = spec
            .arg(&config.mode)
            .arg(engine::EXECUTION_PROVIDERS_FLAG);
        for provider in &config.execution_providers {
            spec = spec.arg(provider.id());
        }
        spec
    }

    /// Command line for the serving gateway:
    /// `<program> <command> <service> --port <port>`.
    pub fn gateway(config: &GatewayConfig) -> Self {
        Self::new(&config.program)
            .arg(&config.command)
            .arg(&config.service)
            .arg(gateway::PORT_FLAG)
            .arg(config.port.to_string())
    }

    /// Build a `std::process::Command` that inherits the current
    /// environment, working directory and standard streams.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for display so it can be pasted into a POSIX shell.
fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@+%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// The two command lines a launch executes, in start order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    /// Background inference engine, started first and never waited on.
    pub engine: ProcessSpec,
    /// Foreground serving gateway, started second and waited on.
    pub gateway: ProcessSpec,
}

impl LaunchPlan {
    /// Build the plan from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            engine: ProcessSpec::engine(&config.engine),
            gateway: ProcessSpec::gateway(&config.gateway),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ExecutionProvider;

    #[test]
    fn test_default_engine_command_line() {
        let spec = ProcessSpec::engine(&EngineConfig::default());
        assert_eq!(spec.program, "python");
        assert_eq!(
            spec.args,
            ["facefusion.py", "run", "--execution-providers", "cuda"]
        );
    }

    #[test]
    fn test_engine_without_script_and_multiple_providers() {
        let config = EngineConfig {
            program: "facefusion".to_string(),
            script: String::new(),
            mode: "run".to_string(),
            execution_providers: vec![ExecutionProvider::TensorRt, ExecutionProvider::Cuda],
        };
        let spec = ProcessSpec::engine(&config);
        assert_eq!(spec.program, "facefusion");
        assert_eq!(spec.args, ["run", "--execution-providers", "tensorrt", "cuda"]);
    }

    #[test]
    fn test_default_gateway_command_line() {
        let spec = ProcessSpec::gateway(&GatewayConfig::default());
        assert_eq!(spec.program, "bentoml");
        assert_eq!(
            spec.args,
            ["serve", "faceswap_bento_service:AIToolsAPI", "--port", "3000"]
        );
    }

    #[test]
    fn test_display_plain_words() {
        let spec = ProcessSpec::gateway(&GatewayConfig::default());
        assert_eq!(
            spec.to_string(),
            "bentoml serve faceswap_bento_service:AIToolsAPI --port 3000"
        );
    }

    #[test]
    fn test_display_quotes_special_words() {
        let spec = ProcessSpec::new("/opt/my engine/python")
            .arg("it's")
            .arg("");
        assert_eq!(spec.to_string(), r"'/opt/my engine/python' 'it'\''s' ''");
    }

    #[test]
    fn test_plan_from_default_config() {
        let plan = LaunchPlan::from_config(&Config::default());
        assert_eq!(plan.engine.program, "python");
        assert_eq!(plan.gateway.program, "bentoml");
    }

    #[test]
    fn test_to_command_carries_program_and_args() {
        let spec = ProcessSpec::new("bentoml").arg("serve");
        let command = spec.to_command();
        assert_eq!(command.get_program(), "bentoml");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["serve"]);
    }
}
