//! Config-fetch endpoint and URL truncation settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Query pair that marks a config request as coming from an AMP page. It is
/// emitted even when the rest of the URL is truncated.
pub const AMP_TYPE_PARAM: (&str, &str) = ("ama_t", "amp");

/// Default config-fetch endpoint. Protocol-relative so the page scheme is kept.
fn default_config_url_base() -> String {
    String::from("//pagead2.googlesyndication.com/getconfig/ama")
}

/// Default upper bound on the length of a generated config URL.
const fn default_max_url_length() -> usize {
    4096
}

fn default_truncation_param() -> String {
    String::from("__amp_trunc")
}

fn default_truncation_value() -> String {
    String::from("1")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Base URL the query string is appended to.
    #[serde(default = "default_config_url_base")]
    pub config_url_base: String,

    /// Maximum length of the generated URL, in bytes.
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,

    /// Name of the query parameter appended when a URL had to be truncated.
    #[serde(default = "default_truncation_param")]
    pub truncation_param: String,

    /// Value of the truncation parameter.
    #[serde(default = "default_truncation_value")]
    pub truncation_value: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            config_url_base: default_config_url_base(),
            max_url_length: default_max_url_length(),
            truncation_param: default_truncation_param(),
            truncation_value: default_truncation_value(),
        }
    }
}

impl EndpointConfig {
    /// The `name=value` marker appended to truncated URLs.
    #[must_use]
    pub fn truncation_marker(&self) -> String {
        format!("{}={}", self.truncation_param, self.truncation_value)
    }

    /// Shortest URL a truncated request can have: `<base>?ama_t=amp&<marker>`.
    #[must_use]
    pub fn min_url_length(&self) -> usize {
        let (name, value) = AMP_TYPE_PARAM;
        self.config_url_base.len() + 1 + name.len() + 1 + value.len() + 1
            + self.truncation_marker().len()
    }

    /// Check that the limit can hold at least [`min_url_length`](Self::min_url_length).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty base, an empty
    /// truncation parameter name, or a limit too small for the base, the
    /// `ama_t=amp` pair and the marker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_url_base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint.config_url_base".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.truncation_param.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint.truncation_param".into(),
                reason: "must not be empty".into(),
            });
        }
        let floor = self.min_url_length();
        if self.max_url_length < floor {
            return Err(ConfigError::InvalidValue {
                field: "endpoint.max_url_length".into(),
                reason: format!(
                    "{} is too small; base URL, ama_t=amp and truncation marker need {floor}",
                    self.max_url_length
                ),
            });
        }
        Ok(())
    }
}
