//! Page context consumed by network strategies.
//!
//! `PageContext` is bound into a strategy when it is constructed.
//! `PageWindow` is handed to `is_enabled` at call time.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `WIDTHxHEIGHT` spec such as `320x500`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidViewport`] if the spec is malformed.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidViewport {
            input: input.to_string(),
        };
        let (width, height) = input
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        Ok(Self {
            width: width.trim().parse().map_err(|_| invalid())?,
            height: height.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Read-only page state supplied by the document and viewport services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Canonical URL of the document, unencoded.
    pub canonical_url: String,
    pub viewport: Viewport,
}

impl PageContext {
    #[must_use]
    pub fn new(canonical_url: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            canonical_url: canonical_url.into(),
            viewport,
        }
    }
}

/// Call-time environment of the page window.
///
/// Holds experiment branch selections, keyed by experiment id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    #[serde(default)]
    experiment_branches: BTreeMap<String, String>,
}

impl PageWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the page was diverted into `branch` of `experiment`.
    #[must_use]
    pub fn with_branch(mut self, experiment: impl Into<String>, branch: impl Into<String>) -> Self {
        self.experiment_branches
            .insert(experiment.into(), branch.into());
        self
    }

    /// Branch selected for `experiment`, if the page was diverted at all.
    #[must_use]
    pub fn experiment_branch(&self, experiment: &str) -> Option<&str> {
        self.experiment_branches.get(experiment).map(String::as_str)
    }
}
