//! Response types returned as JSON by `amacfg` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::attributes::AttributeMap;
use crate::constraints::AdConstraints;
use crate::network::NetworkId;

/// Everything a network strategy derives for one page. Response from
/// `amacfg resolve`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NetworkReport {
    pub network: NetworkId,
    pub enabled: bool,
    pub responsive_enabled: bool,
    pub config_url: String,
    pub attributes: AttributeMap,
    pub default_ad_constraints: AdConstraints,
    /// `None` when the network has no sticky support or the page did not
    /// opt in.
    pub sticky_ad_attributes: Option<AttributeMap>,
}

/// One row of `amacfg networks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NetworkSummary {
    pub network: NetworkId,
    /// Element attribute that carries the client id for the config URL.
    pub client_attribute: String,
    pub responsive_enabled: bool,
    pub supports_sticky_ads: bool,
}
