//! Cross-cutting error types.
//!
//! The resolver itself never fails: unknown networks and missing attributes
//! are expressed as `None`. These errors cover parsing of caller-supplied
//! inputs (viewport specs, `name=value` pairs, auto-ads config JSON).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A viewport spec was not of the form `WIDTHxHEIGHT`.
    #[error("Invalid viewport '{input}': expected WIDTHxHEIGHT (e.g. 320x500)")]
    InvalidViewport { input: String },

    /// A key/value pair was not of the form `name=value`.
    #[error("Invalid pair '{input}': expected name=value")]
    InvalidPair { input: String },

    /// The auto-ads config document could not be parsed.
    #[error("Invalid auto-ads config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
