//! Application-wide constants.
//!
//! All fixed program names, arguments and ports are defined here so the
//! defaults of the two launched services can be found in one place.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "faceswap-launcher";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Defaults for the background inference engine.
pub mod engine {
    /// Interpreter that runs the engine entry point.
    pub const PROGRAM: &str = "python";

    /// Engine entry point script.
    pub const SCRIPT: &str = "facefusion.py";

    /// Engine run mode.
    pub const MODE: &str = "run";

    /// Flag that selects the hardware execution backend.
    pub const EXECUTION_PROVIDERS_FLAG: &str = "--execution-providers";
}

/// Defaults for the foreground serving gateway.
pub mod gateway {
    /// Model-serving executable.
    pub const PROGRAM: &str = "bentoml";

    /// Gateway subcommand.
    pub const COMMAND: &str = "serve";

    /// Module-qualified name of the service class to serve.
    pub const SERVICE: &str = "faceswap_bento_service:AIToolsAPI";

    /// Port the gateway binds.
    pub const PORT: u16 = 3000;

    /// Flag that carries the port.
    pub const PORT_FLAG: &str = "--port";
}

/// Exit codes used when the gateway cannot provide one.
///
/// These follow POSIX shell conventions so that scripts wrapping the launcher
/// see the same codes a shell would report.
pub mod exit_code {
    /// Generic failure.
    pub const FAILURE: i32 = 1;

    /// Executable found but could not be executed.
    pub const NOT_EXECUTABLE: i32 = 126;

    /// Executable not found.
    pub const NOT_FOUND: i32 = 127;

    /// Base added to a terminating signal number.
    pub const SIGNAL_BASE: i32 = 128;
}
