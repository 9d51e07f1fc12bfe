//! Ad-density constraints for auto-inserted ads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum spacing that applies once `ad_count` ads have been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacingRule {
    pub ad_count: u32,
    pub spacing: u32,
}

/// Spacing and count limits governing automatic ad insertion.
///
/// Spacings are vertical distances in CSS pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdConstraints {
    /// Minimum spacing before any ads have been placed.
    pub initial_min_spacing: u32,
    /// Ordered by ascending `ad_count`.
    pub subsequent_min_spacing: Vec<SpacingRule>,
    pub max_ad_count: u32,
}

impl AdConstraints {
    /// Maximum number of ads either network inserts by default.
    pub const DEFAULT_MAX_AD_COUNT: u32 = 8;

    /// Default constraints scaled to a viewport of height `viewport_height`:
    /// one viewport before the first ad, two after three ads, three after six.
    #[must_use]
    pub fn for_viewport_height(viewport_height: u32) -> Self {
        Self {
            initial_min_spacing: viewport_height,
            subsequent_min_spacing: vec![
                SpacingRule {
                    ad_count: 3,
                    spacing: viewport_height.saturating_mul(2),
                },
                SpacingRule {
                    ad_count: 6,
                    spacing: viewport_height.saturating_mul(3),
                },
            ],
            max_ad_count: Self::DEFAULT_MAX_AD_COUNT,
        }
    }

    /// Spacing in force after `placed` ads have been inserted.
    #[must_use]
    pub fn spacing_after(&self, placed: u32) -> u32 {
        self.subsequent_min_spacing
            .iter()
            .take_while(|rule| rule.ad_count <= placed)
            .last()
            .map_or(self.initial_min_spacing, |rule| rule.spacing)
    }
}
