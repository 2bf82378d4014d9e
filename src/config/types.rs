//! Configuration type definitions.

use crate::constants::{engine, gateway};
use crate::provider::ExecutionProvider;
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background inference engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Foreground serving gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// How to start the inference engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Executable to run (interpreter or engine binary).
    pub program: String,

    /// Entry point script passed as the first argument. Empty to omit.
    pub script: String,

    /// Engine run mode.
    pub mode: String,

    /// Hardware backends, in preference order.
    pub execution_providers: Vec<ExecutionProvider>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: engine::PROGRAM.to_string(),
            script: engine::SCRIPT.to_string(),
            mode: engine::MODE.to_string(),
            execution_providers: vec![ExecutionProvider::Cuda],
        }
    }
}

/// How to start the serving gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Model-serving executable.
    pub program: String,

    /// Subcommand passed to the executable.
    pub command: String,

    /// Module-qualified service class, e.g. `module:Class`.
    pub service: String,

    /// Port the gateway binds.
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            program: gateway::PROGRAM.to_string(),
            command: gateway::COMMAND.to_string(),
            service: gateway::SERVICE.to_string(),
            port: gateway::PORT,
        }
    }
}

/// Output mode for informational subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Human-readable text.
    #[default]
    Human,
    /// Single JSON document.
    Json,
}

impl OutputMode {
    /// Whether the mode produces machine-readable output.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let engine = EngineConfig::default();
        assert_eq!(engine.program, "python");
        assert_eq!(engine.script, "facefusion.py");
        assert_eq!(engine.mode, "run");
        assert_eq!(engine.execution_providers, vec![ExecutionProvider::Cuda]);
    }

    #[test]
    fn test_gateway_defaults() {
        let gateway = GatewayConfig::default();
        assert_eq!(gateway.program, "bentoml");
        assert_eq!(gateway.command, "serve");
        assert_eq!(gateway.service, "faceswap_bento_service:AIToolsAPI");
        assert_eq!(gateway.port, 3000);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[gateway]
port = 8080

[engine]
execution_providers = ["cpu"]
"#,
        )
        .unwrap_or_default();
        assert_eq!(config.gateway.port, 8080);
        assert_eq!(config.gateway.service, "faceswap_bento_service:AIToolsAPI");
        assert_eq!(config.engine.execution_providers, vec![ExecutionProvider::Cpu]);
        assert_eq!(config.engine.program, "python");
    }

    #[test]
    fn test_output_mode_structured() {
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Human.is_structured());
    }
}
