//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::config::validate_service_id;

/// Parse and validate a TCP port (1-65535).
pub fn parse_port(s: &str) -> Result<u16, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid port number"))?;

    if !(1..=u32::from(u16::MAX)).contains(&value) {
        return Err(format!("port must be between 1 and 65535, got {value}"));
    }

    u16::try_from(value).map_err(|e| e.to_string())
}

/// Parse and validate a `module:Class` service identifier.
pub fn parse_service_id(s: &str) -> Result<String, String> {
    validate_service_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Parse a non-empty program name or path.
pub fn parse_program(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("program must not be empty".to_string());
    }
    Ok(s.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("3000").ok(), Some(3000));
        assert_eq!(parse_port("1").ok(), Some(1));
        assert_eq!(parse_port("65535").ok(), Some(65535));
    }

    #[test]
    fn test_parse_port_invalid_range() {
        let err = parse_port("0");
        assert!(err.unwrap_err().contains("port must be between"));
        assert!(parse_port("65536").is_err());
    }

    #[test]
    fn test_parse_port_invalid_number() {
        let err = parse_port("http");
        assert!(err.unwrap_err().contains("not a valid port number"));
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn test_parse_service_id() {
        assert_eq!(
            parse_service_id("faceswap_bento_service:AIToolsAPI").ok(),
            Some("faceswap_bento_service:AIToolsAPI".to_string())
        );
        let err = parse_service_id("faceswap_bento_service");
        assert!(err.unwrap_err().contains("invalid service identifier"));
    }

    #[test]
    fn test_parse_program() {
        assert_eq!(parse_program("bentoml").ok(), Some("bentoml".to_string()));
        assert!(parse_program(" ").is_err());
    }
}
