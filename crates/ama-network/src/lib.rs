//! # ama-network
//!
//! Per-ad-network configuration strategies for automatic ad insertion.
//!
//! Given the `type` of an `amp-auto-ads` element, [`resolve`] picks the
//! strategy for that network and binds it to the element's attributes, the
//! page context and the config-fetch endpoint settings. The strategy then
//! derives:
//! - the config-fetch URL (`client`, `plah`, `ama_t=amp`, `url`)
//! - the attributes for generated ad tags
//! - default ad-density constraints
//! - sticky-ad attributes from the fetched auto-ads config
//!
//! Supported networks:
//! - `adsense`
//! - `doubleclick`

pub mod adsense;
pub mod doubleclick;
pub mod url_builder;

pub use adsense::AdSenseConfig;
pub use doubleclick::DoubleclickConfig;

use ama_config::EndpointConfig;
use ama_core::attributes::{AttributeMap, AttributeSource};
use ama_core::constraints::AdConstraints;
use ama_core::network::NetworkId;
use ama_core::page::{PageContext, PageWindow};
use ama_core::responses::{NetworkReport, NetworkSummary};
use ama_core::sticky::AutoAdsConfig;

// ── Strategy contract ──────────────────────────────────────────────

/// Operations every network strategy provides.
pub trait NetworkConfig {
    fn network_id(&self) -> NetworkId;

    /// Whether auto ads should run for this network on the page.
    fn is_enabled(&self, win: &PageWindow) -> bool;

    /// Whether generated ads may use responsive sizing.
    fn is_responsive_enabled(&self) -> bool;

    /// URL to fetch the auto-ads config from.
    fn config_url(&self) -> String;

    /// Attributes for generated ad tags. Always contains `type`.
    fn attributes(&self) -> AttributeMap;

    fn default_ad_constraints(&self) -> AdConstraints;

    /// Attributes for a sticky ad, or `None` if sticky ads should not be
    /// placed.
    fn sticky_ad_attributes(&self, config: Option<&AutoAdsConfig>) -> Option<AttributeMap>;

    /// Snapshot of every derived value.
    fn report(&self, win: &PageWindow, config: Option<&AutoAdsConfig>) -> NetworkReport {
        NetworkReport {
            network: self.network_id(),
            enabled: self.is_enabled(win),
            responsive_enabled: self.is_responsive_enabled(),
            config_url: self.config_url(),
            attributes: self.attributes(),
            default_ad_constraints: self.default_ad_constraints(),
            sticky_ad_attributes: self.sticky_ad_attributes(config),
        }
    }
}

// ── Resolver ───────────────────────────────────────────────────────

/// A resolved network strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdNetwork {
    AdSense(AdSenseConfig),
    Doubleclick(DoubleclickConfig),
}

impl AdNetwork {
    /// Build the strategy for `id`.
    pub fn new<A: AttributeSource + ?Sized>(
        id: NetworkId,
        attributes: &A,
        page: PageContext,
        endpoint: EndpointConfig,
    ) -> Self {
        match id {
            NetworkId::AdSense => Self::AdSense(AdSenseConfig::new(attributes, page, endpoint)),
            NetworkId::Doubleclick => {
                Self::Doubleclick(DoubleclickConfig::new(attributes, page, endpoint))
            }
        }
    }

    fn inner(&self) -> &dyn NetworkConfig {
        match self {
            Self::AdSense(config) => config,
            Self::Doubleclick(config) => config,
        }
    }
}

impl NetworkConfig for AdNetwork {
    fn network_id(&self) -> NetworkId {
        self.inner().network_id()
    }

    fn is_enabled(&self, win: &PageWindow) -> bool {
        self.inner().is_enabled(win)
    }

    fn is_responsive_enabled(&self) -> bool {
        self.inner().is_responsive_enabled()
    }

    fn config_url(&self) -> String {
        self.inner().config_url()
    }

    fn attributes(&self) -> AttributeMap {
        self.inner().attributes()
    }

    fn default_ad_constraints(&self) -> AdConstraints {
        self.inner().default_ad_constraints()
    }

    fn sticky_ad_attributes(&self, config: Option<&AutoAdsConfig>) -> Option<AttributeMap> {
        self.inner().sticky_ad_attributes(config)
    }
}

/// Resolve the strategy for `network_type`, or `None` if the network is not
/// supported.
///
/// The strategy copies what it needs from `attributes`; later changes to the
/// element are not seen.
pub fn resolve<A: AttributeSource + ?Sized>(
    network_type: &str,
    attributes: &A,
    page: &PageContext,
    endpoint: &EndpointConfig,
) -> Option<AdNetwork> {
    let Some(id) = NetworkId::parse(network_type) else {
        tracing::debug!(network_type, "no config strategy for ad network");
        return None;
    };
    tracing::debug!(network = %id, "resolved ad network config strategy");
    Some(AdNetwork::new(id, attributes, page.clone(), endpoint.clone()))
}

/// Static facts about every supported network.
#[must_use]
pub fn supported_networks() -> Vec<NetworkSummary> {
    NetworkId::ALL
        .into_iter()
        .map(|network| match network {
            NetworkId::AdSense => NetworkSummary {
                network,
                client_attribute: AdSenseConfig::CLIENT_ATTRIBUTE.to_string(),
                responsive_enabled: true,
                supports_sticky_ads: true,
            },
            NetworkId::Doubleclick => NetworkSummary {
                network,
                client_attribute: DoubleclickConfig::CLIENT_ATTRIBUTE.to_string(),
                responsive_enabled: false,
                supports_sticky_ads: false,
            },
        })
        .collect()
}
