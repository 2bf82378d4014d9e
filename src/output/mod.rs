//! Structured output for informational subcommands.

mod json_envelope;

pub use json_envelope::{
    EventType, JsonEnvelope, PlanPayload, ProvidersPayload, ResultType, SPEC_VERSION,
};

use crate::error::{Error, Result};

/// Print a JSON result event to stdout.
#[allow(clippy::print_stdout)]
pub fn emit_json_result<T: serde::Serialize>(payload: &T) -> Result<()> {
    let envelope = JsonEnvelope::new(EventType::Result, payload);
    let json = serde_json::to_string(&envelope).map_err(|e| Error::JsonSerialize { source: e })?;
    println!("{json}");
    Ok(())
}
