//! JSON envelope types for CLI output.
//!
//! Informational subcommands can print a single JSON document so that the
//! launcher can be driven by deployment tooling.

use crate::launcher::LaunchPlan;
use crate::provider::ProviderMetadata;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Current spec version for JSON envelope.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping all CLI output events.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: String,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Command lines a launch would execute.
    Plan,
    /// Available execution providers.
    Providers,
}

/// Payload for the `plan` result.
#[derive(Debug, Serialize)]
pub struct PlanPayload<'a> {
    /// Result discriminator.
    pub result_type: ResultType,
    /// Engine and gateway command lines.
    #[serde(flatten)]
    pub plan: &'a LaunchPlan,
}

/// Payload for the `providers` result.
#[derive(Debug, Serialize)]
pub struct ProvidersPayload {
    /// Result discriminator.
    pub result_type: ResultType,
    /// Every provider the engine can be asked to use.
    pub providers: Vec<ProviderMetadata>,
}
