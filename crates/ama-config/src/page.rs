//! Page defaults used when a caller does not supply them.

use serde::{Deserialize, Serialize};

const fn default_viewport_width() -> u32 {
    320
}

const fn default_viewport_height() -> u32 {
    500
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageConfig {
    /// Viewport width assumed when none is given.
    #[serde(default = "default_viewport_width")]
    pub default_viewport_width: u32,

    /// Viewport height assumed when none is given.
    #[serde(default = "default_viewport_height")]
    pub default_viewport_height: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_viewport_width: default_viewport_width(),
            default_viewport_height: default_viewport_height(),
        }
    }
}
