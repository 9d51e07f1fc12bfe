//! Ad network identifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ad-serving partner whose config rules apply to an `amp-auto-ads` element.
///
/// The `type` attribute of the host element carries the identifier string.
/// Only the variants below are recognized; anything else resolves to no
/// strategy at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    AdSense,
    Doubleclick,
}

impl NetworkId {
    /// Every supported network, in display order.
    pub const ALL: [Self; 2] = [Self::AdSense, Self::Doubleclick];

    /// Parse a network type string. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "adsense" => Some(Self::AdSense),
            "doubleclick" => Some(Self::Doubleclick),
            _ => None,
        }
    }

    /// The identifier as it appears in the `type` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdSense => "adsense",
            Self::Doubleclick => "doubleclick",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
