//! Doubleclick auto-ads strategy.

use ama_config::EndpointConfig;
use ama_core::attributes::{AttributeMap, AttributeSource, names};
use ama_core::constraints::AdConstraints;
use ama_core::network::NetworkId;
use ama_core::page::{PageContext, PageWindow};
use ama_core::sticky::AutoAdsConfig;

use crate::NetworkConfig;
use crate::url_builder::config_fetch_url;

/// Doubleclick config strategy, bound to one element and page.
///
/// Config is fetched with the legacy AdSense client id; generated ad tags
/// carry the targeting JSON and slot of the host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleclickConfig {
    legacy_client: Option<String>,
    targeting_json: Option<String>,
    slot: Option<String>,
    page: PageContext,
    endpoint: EndpointConfig,
}

impl DoubleclickConfig {
    pub const CLIENT_ATTRIBUTE: &'static str = names::AD_LEGACY_CLIENT;

    pub fn new<A: AttributeSource + ?Sized>(
        attributes: &A,
        page: PageContext,
        endpoint: EndpointConfig,
    ) -> Self {
        let owned = |name| attributes.non_empty_attribute(name).map(str::to_owned);
        Self {
            legacy_client: owned(names::AD_LEGACY_CLIENT),
            targeting_json: owned(names::JSON),
            slot: owned(names::SLOT),
            page,
            endpoint,
        }
    }
}

impl NetworkConfig for DoubleclickConfig {
    fn network_id(&self) -> NetworkId {
        NetworkId::Doubleclick
    }

    fn is_enabled(&self, _win: &PageWindow) -> bool {
        true
    }

    fn is_responsive_enabled(&self) -> bool {
        false
    }

    fn config_url(&self) -> String {
        config_fetch_url(&self.endpoint, self.legacy_client.as_deref(), &self.page)
    }

    fn attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        attributes.insert("type".into(), NetworkId::Doubleclick.to_string());
        if let Some(json) = &self.targeting_json {
            attributes.insert("json".into(), json.clone());
        }
        if let Some(slot) = &self.slot {
            attributes.insert(names::SLOT.into(), slot.clone());
        }
        attributes
    }

    fn default_ad_constraints(&self) -> AdConstraints {
        AdConstraints::for_viewport_height(self.page.viewport.height)
    }

    fn sticky_ad_attributes(&self, _config: Option<&AutoAdsConfig>) -> Option<AttributeMap> {
        None
    }
}
