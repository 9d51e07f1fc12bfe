//! Sticky (anchor) ad opt-in state from the fetched auto-ads config.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Opt-in codes that affect sticky ads.
///
/// The config carries other codes too; they are ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptInStatus {
    /// Publisher opted in to anchor ads.
    AnchorAds,
    /// Publisher opted in to anchor ads that may render without a fill.
    AnchorAdsNoFill,
}

impl OptInStatus {
    #[must_use]
    pub const fn code(self) -> u64 {
        match self {
            Self::AnchorAds => 2,
            Self::AnchorAdsNoFill => 4,
        }
    }
}

/// The parts of the auto-ads config document this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoAdsConfig {
    /// Raw opt-in codes. Non-integer entries are dropped while parsing and a
    /// non-array value parses as empty.
    #[serde(
        rename = "optInStatus",
        default,
        deserialize_with = "lenient_codes"
    )]
    pub opt_in_status: Vec<u64>,
}

impl AutoAdsConfig {
    #[must_use]
    pub fn with_opt_in_status(codes: impl IntoIterator<Item = u64>) -> Self {
        Self {
            opt_in_status: codes.into_iter().collect(),
        }
    }

    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        // A derived struct also accepts a JSON array as a sequence of fields.
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(serde_json::from_value(serde_json::Value::Object(object))?)
    }

    #[must_use]
    pub fn is_opted_in(&self, status: OptInStatus) -> bool {
        self.opt_in_status.contains(&status.code())
    }
}

fn lenient_codes<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items.iter().filter_map(serde_json::Value::as_u64).collect(),
        _ => Vec::new(),
    })
}
