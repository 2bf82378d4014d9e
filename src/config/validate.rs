//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_engine(config)?;
    validate_gateway(config)?;
    Ok(())
}

/// Validate engine settings.
fn validate_engine(config: &Config) -> Result<()> {
    let engine = &config.engine;

    if engine.program.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "engine.program must not be empty".to_string(),
        });
    }

    if engine.mode.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "engine.mode must not be empty".to_string(),
        });
    }

    if engine.execution_providers.is_empty() {
        return Err(Error::ConfigValidation {
            message: "engine.execution_providers must name at least one provider".to_string(),
        });
    }

    Ok(())
}

/// Validate gateway settings.
fn validate_gateway(config: &Config) -> Result<()> {
    let gateway = &config.gateway;

    if gateway.program.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "gateway.program must not be empty".to_string(),
        });
    }

    if gateway.command.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "gateway.command must not be empty".to_string(),
        });
    }

    if gateway.port == 0 {
        return Err(Error::ConfigValidation {
            message: "gateway.port must be between 1 and 65535".to_string(),
        });
    }

    validate_service_id(&gateway.service)
}

/// Validate a module-qualified service identifier such as
/// `faceswap_bento_service:AIToolsAPI`.
///
/// Both sides of the single `:` are dotted Python identifiers.
pub fn validate_service_id(value: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidServiceId {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let Some((module, attr)) = value.split_once(':') else {
        return Err(invalid("expected 'module:Class'"));
    };

    if attr.contains(':') {
        return Err(invalid("more than one ':'"));
    }
    if !is_dotted_identifier(module) {
        return Err(invalid("module part is not a dotted identifier"));
    }
    if !is_dotted_identifier(attr) {
        return Err(invalid("service part is not a dotted identifier"));
    }

    Ok(())
}

fn is_dotted_identifier(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = Config::default();
        config.gateway.port = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_empty_programs() {
        let mut config = Config::default();
        config.engine.program = "  ".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.gateway.program = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_no_execution_providers() {
        let mut config = Config::default();
        config.engine.execution_providers.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_script_is_allowed() {
        let mut config = Config::default();
        config.engine.script = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_service_id_valid() {
        assert!(validate_service_id("faceswap_bento_service:AIToolsAPI").is_ok());
        assert!(validate_service_id("pkg.module:Service").is_ok());
        assert!(validate_service_id("svc:Outer.Inner").is_ok());
    }

    #[test]
    fn test_service_id_invalid() {
        for value in [
            "",
            "faceswap_bento_service",
            ":AIToolsAPI",
            "faceswap_bento_service:",
            "a:b:c",
            "1module:Api",
            "mod-ule:Api",
            "pkg..mod:Api",
        ] {
            assert!(
                matches!(
                    validate_service_id(value),
                    Err(Error::InvalidServiceId { .. })
                ),
                "'{value}' should be rejected"
            );
        }
    }
}
