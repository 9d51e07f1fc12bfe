//! AdSense auto-ads strategy.

use ama_config::EndpointConfig;
use ama_core::attributes::{AttributeMap, AttributeSource, names};
use ama_core::constraints::AdConstraints;
use ama_core::network::NetworkId;
use ama_core::page::{PageContext, PageWindow};
use ama_core::sticky::{AutoAdsConfig, OptInStatus};

use crate::NetworkConfig;
use crate::url_builder::config_fetch_url;

/// Experiment that holds a slice of AdSense pages back from auto ads.
pub const HOLDOUT_EXPERIMENT: &str = "amp-auto-ads-adsense-holdout";

/// Branch ids of [`HOLDOUT_EXPERIMENT`].
pub mod holdout_branch {
    pub const CONTROL: &str = "19861210";
    /// Pages in this branch get no AdSense auto ads.
    pub const EXPERIMENT: &str = "19861211";
}

/// AdSense config strategy, bound to one element and page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdSenseConfig {
    ad_client: Option<String>,
    ad_host: Option<String>,
    ad_host_channel: Option<String>,
    page: PageContext,
    endpoint: EndpointConfig,
}

impl AdSenseConfig {
    /// Element attribute carrying the publisher client id.
    pub const CLIENT_ATTRIBUTE: &'static str = names::AD_CLIENT;

    pub fn new<A: AttributeSource + ?Sized>(
        attributes: &A,
        page: PageContext,
        endpoint: EndpointConfig,
    ) -> Self {
        let owned = |name| attributes.non_empty_attribute(name).map(str::to_owned);
        Self {
            ad_client: owned(names::AD_CLIENT),
            ad_host: owned(names::AD_HOST),
            ad_host_channel: owned(names::AD_HOST_CHANNEL),
            page,
            endpoint,
        }
    }
}

impl NetworkConfig for AdSenseConfig {
    fn network_id(&self) -> NetworkId {
        NetworkId::AdSense
    }

    fn is_enabled(&self, win: &PageWindow) -> bool {
        win.experiment_branch(HOLDOUT_EXPERIMENT) != Some(holdout_branch::EXPERIMENT)
    }

    fn is_responsive_enabled(&self) -> bool {
        true
    }

    fn config_url(&self) -> String {
        config_fetch_url(&self.endpoint, self.ad_client.as_deref(), &self.page)
    }

    fn attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        attributes.insert("type".into(), NetworkId::AdSense.to_string());
        if let Some(client) = &self.ad_client {
            attributes.insert(names::AD_CLIENT.into(), client.clone());
        }
        // A host channel only means something for a hosted account.
        if let Some(host) = &self.ad_host {
            attributes.insert(names::AD_HOST.into(), host.clone());
            if let Some(channel) = &self.ad_host_channel {
                attributes.insert(names::AD_HOST_CHANNEL.into(), channel.clone());
            }
        }
        attributes
    }

    fn default_ad_constraints(&self) -> AdConstraints {
        AdConstraints::for_viewport_height(self.page.viewport.height)
    }

    fn sticky_ad_attributes(&self, config: Option<&AutoAdsConfig>) -> Option<AttributeMap> {
        let config = config?;
        let no_fill = if config.is_opted_in(OptInStatus::AnchorAds) {
            "false"
        } else if config.is_opted_in(OptInStatus::AnchorAdsNoFill) {
            "true"
        } else {
            return None;
        };
        Some(AttributeMap::from([("no-fill".to_string(), no_fill.to_string())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ama_core::attributes::ElementAttributes;
    use ama_core::page::Viewport;

    fn page() -> PageContext {
        PageContext::new("https://foo.bar/baz", Viewport::new(320, 500))
    }

    #[test]
    fn host_channel_requires_host() {
        let attrs = ElementAttributes::new()
            .with(names::AD_CLIENT, "ca-pub-1234")
            .with(names::AD_HOST_CHANNEL, "chan");
        let config = AdSenseConfig::new(&attrs, page(), EndpointConfig::default());
        assert!(!config.attributes().contains_key(names::AD_HOST_CHANNEL));

        let attrs = attrs.with(names::AD_HOST, "ca-pub-5678");
        let config = AdSenseConfig::new(&attrs, page(), EndpointConfig::default());
        let attributes = config.attributes();
        assert_eq!(attributes.get(names::AD_HOST).map(String::as_str), Some("ca-pub-5678"));
        assert_eq!(attributes.get(names::AD_HOST_CHANNEL).map(String::as_str), Some("chan"));
    }

    #[test]
    fn empty_host_is_omitted() {
        let attrs = ElementAttributes::new()
            .with(names::AD_CLIENT, "ca-pub-1234")
            .with(names::AD_HOST, "");
        let config = AdSenseConfig::new(&attrs, page(), EndpointConfig::default());
        assert!(!config.attributes().contains_key(names::AD_HOST));
    }

    #[test]
    fn holdout_experiment_branch_disables() {
        let config = AdSenseConfig::new(&ElementAttributes::new(), page(), EndpointConfig::default());
        assert!(config.is_enabled(&PageWindow::new()));
        assert!(config.is_enabled(
            &PageWindow::new().with_branch(HOLDOUT_EXPERIMENT, holdout_branch::CONTROL)
        ));
        assert!(!config.is_enabled(
            &PageWindow::new().with_branch(HOLDOUT_EXPERIMENT, holdout_branch::EXPERIMENT)
        ));
    }

    #[test]
    fn attributes_are_bound_at_construction() {
        let mut attrs = ElementAttributes::new().with(names::AD_CLIENT, "ca-pub-1234");
        let config = AdSenseConfig::new(&attrs, page(), EndpointConfig::default());
        attrs.set(names::AD_CLIENT, "ca-pub-9999");
        assert!(config.config_url().contains("client=ca-pub-1234"));
    }
}
