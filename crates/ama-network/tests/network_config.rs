//! Behaviour of the resolved strategies for an `amp-auto-ads` element on a
//! page with canonical URL `https://foo.bar/baz` and a 320x500 viewport.

use ama_config::EndpointConfig;
use ama_core::attributes::{AttributeMap, ElementAttributes, names};
use ama_core::constraints::{AdConstraints, SpacingRule};
use ama_core::page::{PageContext, PageWindow, Viewport};
use ama_core::sticky::AutoAdsConfig;
use ama_network::{AdNetwork, NetworkConfig, resolve};
use pretty_assertions::assert_eq;
use rstest::rstest;

const CANONICAL_URL: &str = "https://foo.bar/baz";
const AD_CLIENT: &str = "ca-pub-1234";
const AD_HOST: &str = "ca-pub-5678";
const AD_LEGACY_CLIENT: &str = "ca-pub-1234";
const TARGETING_JSON: &str = r#"{"Categories":"A"}"#;
const EXPERIMENT_SETTINGS: &str = r#"{"width":300,"height":250}"#;
const AD_SLOT: &str = "1234/example.com/SLOT_1";

fn page_with(canonical_url: &str) -> PageContext {
    PageContext::new(canonical_url, Viewport::new(320, 500))
}

fn adsense_element() -> ElementAttributes {
    ElementAttributes::new().with(names::AD_CLIENT, AD_CLIENT)
}

fn doubleclick_element() -> ElementAttributes {
    ElementAttributes::new()
        .with(names::AD_LEGACY_CLIENT, AD_LEGACY_CLIENT)
        .with(names::EXPERIMENT, EXPERIMENT_SETTINGS)
        .with(names::JSON, TARGETING_JSON)
        .with(names::SLOT, AD_SLOT)
}

fn resolve_on(network_type: &str, element: &ElementAttributes, canonical_url: &str) -> AdNetwork {
    resolve(
        network_type,
        element,
        &page_with(canonical_url),
        &EndpointConfig::default(),
    )
    .expect("network should resolve")
}

fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn long_canonical_url() -> String {
    format!("{}shouldnt_be_included", "http://foo.bar/a".repeat(4050))
}

fn expected_constraints() -> AdConstraints {
    AdConstraints {
        initial_min_spacing: 500,
        subsequent_min_spacing: vec![
            SpacingRule {
                ad_count: 3,
                spacing: 1000,
            },
            SpacingRule {
                ad_count: 6,
                spacing: 1500,
            },
        ],
        max_ad_count: 8,
    }
}

// ── AdSense ────────────────────────────────────────────────────────

#[test]
fn adsense_generates_config_fetch_url() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    assert_eq!(
        network.config_url(),
        format!(
            "//pagead2.googlesyndication.com/getconfig/ama?client={AD_CLIENT}\
             &plah=foo.bar&ama_t=amp&url=https%3A%2F%2Ffoo.bar%2Fbaz"
        )
    );
}

#[test]
fn adsense_is_responsive_enabled() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    assert!(network.is_responsive_enabled());
}

#[test]
fn adsense_is_enabled_outside_holdout() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    assert!(network.is_enabled(&PageWindow::new()));
}

#[test]
fn adsense_generates_attributes() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    assert_eq!(
        network.attributes(),
        attrs(&[("type", "adsense"), ("data-ad-client", AD_CLIENT)])
    );
}

#[test]
fn adsense_ignores_doubleclick_attributes() {
    let element = adsense_element()
        .with(names::JSON, TARGETING_JSON)
        .with(names::SLOT, AD_SLOT);
    let network = resolve_on("adsense", &element, CANONICAL_URL);
    assert_eq!(
        network.attributes(),
        attrs(&[("type", "adsense"), ("data-ad-client", AD_CLIENT)])
    );
}

#[test]
fn adsense_adds_data_ad_host_when_set() {
    let element = adsense_element().with(names::AD_HOST, AD_HOST);
    let network = resolve_on("adsense", &element, CANONICAL_URL);
    assert_eq!(
        network.attributes(),
        attrs(&[
            ("type", "adsense"),
            ("data-ad-client", AD_CLIENT),
            ("data-ad-host", AD_HOST),
        ])
    );
}

#[rstest]
#[case::adsense("adsense", adsense_element())]
#[case::doubleclick("doubleclick", doubleclick_element())]
fn default_ad_constraints(#[case] network_type: &str, #[case] element: ElementAttributes) {
    let network = resolve_on(network_type, &element, CANONICAL_URL);
    assert_eq!(network.default_ad_constraints(), expected_constraints());
    // Independent of call order and repetition.
    let _ = network.config_url();
    assert_eq!(network.default_ad_constraints(), expected_constraints());
}

#[rstest]
#[case::anchor_ads(&[2], Some("false"))]
#[case::anchor_ads_no_fill(&[4], Some("true"))]
#[case::both_prefers_anchor_ads(&[2, 4], Some("false"))]
#[case::both_reversed(&[4, 2], Some("false"))]
#[case::unrelated_codes(&[1, 3], None)]
#[case::empty(&[], None)]
fn adsense_sticky_ad_attributes(#[case] codes: &[u64], #[case] no_fill: Option<&str>) {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    let config = AutoAdsConfig::with_opt_in_status(codes.iter().copied());
    assert_eq!(
        network.sticky_ad_attributes(Some(&config)),
        no_fill.map(|value| attrs(&[("no-fill", value)]))
    );
}

#[test]
fn adsense_sticky_ad_attributes_without_config() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    assert_eq!(network.sticky_ad_attributes(None), None);
}

#[test]
fn adsense_sticky_ad_attributes_from_fetched_json() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    let config = AutoAdsConfig::from_json(r#"{"optInStatus": [4], "placements": []}"#).unwrap();
    assert_eq!(
        network.sticky_ad_attributes(Some(&config)),
        Some(attrs(&[("no-fill", "true")]))
    );

    let config = AutoAdsConfig::from_json(r#"{"optInStatus": "2"}"#).unwrap();
    assert_eq!(network.sticky_ad_attributes(Some(&config)), None);
}

// ── Doubleclick ────────────────────────────────────────────────────

#[test]
fn doubleclick_is_always_enabled() {
    let network = resolve_on("doubleclick", &doubleclick_element(), CANONICAL_URL);
    assert!(network.is_enabled(&PageWindow::new()));
    assert!(network.is_enabled(
        &PageWindow::new().with_branch(
            ama_network::adsense::HOLDOUT_EXPERIMENT,
            ama_network::adsense::holdout_branch::EXPERIMENT,
        )
    ));
}

#[test]
fn doubleclick_generates_config_fetch_url() {
    let network = resolve_on("doubleclick", &doubleclick_element(), CANONICAL_URL);
    assert_eq!(
        network.config_url(),
        format!(
            "//pagead2.googlesyndication.com/getconfig/ama?client={AD_LEGACY_CLIENT}\
             &plah=foo.bar&ama_t=amp&url=https%3A%2F%2Ffoo.bar%2Fbaz"
        )
    );
}

#[test]
fn doubleclick_generates_attributes() {
    let network = resolve_on("doubleclick", &doubleclick_element(), CANONICAL_URL);
    assert_eq!(
        network.attributes(),
        attrs(&[
            ("type", "doubleclick"),
            ("json", TARGETING_JSON),
            ("data-slot", AD_SLOT),
        ])
    );
}

#[test]
fn doubleclick_ignores_adsense_attributes() {
    let element = doubleclick_element()
        .with(names::AD_HOST, AD_HOST)
        .with(names::AD_CLIENT, AD_CLIENT);
    let network = resolve_on("doubleclick", &element, CANONICAL_URL);
    assert_eq!(
        network.attributes(),
        attrs(&[
            ("type", "doubleclick"),
            ("json", TARGETING_JSON),
            ("data-slot", AD_SLOT),
        ])
    );
}

#[test]
fn doubleclick_is_not_responsive_enabled() {
    let network = resolve_on("doubleclick", &doubleclick_element(), CANONICAL_URL);
    assert!(!network.is_responsive_enabled());
}

#[rstest]
#[case::no_config(None)]
#[case::opted_in(Some(AutoAdsConfig::with_opt_in_status([2, 4])))]
fn doubleclick_has_no_sticky_ad_attributes(#[case] config: Option<AutoAdsConfig>) {
    let network = resolve_on("doubleclick", &doubleclick_element(), CANONICAL_URL);
    assert_eq!(network.sticky_ad_attributes(config.as_ref()), None);
}

// ── Shared ─────────────────────────────────────────────────────────

#[rstest]
#[case::adsense("adsense", adsense_element())]
#[case::doubleclick("doubleclick", doubleclick_element())]
fn truncates_long_canonical_url(#[case] network_type: &str, #[case] element: ElementAttributes) {
    let network = resolve_on(network_type, &element, &long_canonical_url());
    let url = network.config_url();
    assert!(url.contains("ama_t=amp"));
    assert!(url.contains("url=http%3A%2F%2Ffoo.bar"));
    assert!(!url.contains("shouldnt_be_included"));
    assert!(url.len() <= EndpointConfig::default().max_url_length);
    assert!(url.ends_with("&__amp_trunc=1"));
}

#[test]
fn truncation_limit_is_configurable() {
    let endpoint = EndpointConfig {
        max_url_length: 200,
        ..Default::default()
    };
    let network = resolve(
        "adsense",
        &adsense_element(),
        &page_with(&long_canonical_url()),
        &endpoint,
    )
    .unwrap();
    let url = network.config_url();
    assert!(url.len() <= 200);
    assert!(url.contains("client=ca-pub-1234&plah=foo.bar&ama_t=amp&url=http%3A%2F%2Ffoo.bar"));
    assert!(url.ends_with("&__amp_trunc=1"));
}

#[test]
fn oversized_client_keeps_amp_type_pair() {
    let client = "c".repeat(5000);
    let element = ElementAttributes::new().with(names::AD_CLIENT, client.as_str());
    let network = resolve_on("adsense", &element, CANONICAL_URL);
    let url = network.config_url();
    assert!(url.len() <= EndpointConfig::default().max_url_length);
    assert!(url.starts_with("//pagead2.googlesyndication.com/getconfig/ama?client=ccc"));
    assert!(url.ends_with("&ama_t=amp&__amp_trunc=1"));
    assert!(!url.contains("plah="));
    assert!(!url.contains("url="));
}

#[test]
fn short_limit_cuts_client_but_keeps_amp_type_pair() {
    let endpoint = EndpointConfig {
        max_url_length: 80,
        ..Default::default()
    };
    let network = resolve(
        "adsense",
        &adsense_element(),
        &page_with(CANONICAL_URL),
        &endpoint,
    )
    .unwrap();
    assert_eq!(
        network.config_url(),
        "//pagead2.googlesyndication.com/getconfig/ama?client=ca-&ama_t=amp&__amp_trunc=1"
    );
}

#[test]
fn unparseable_canonical_url_omits_plah() {
    let network = resolve_on("adsense", &adsense_element(), "not a url");
    assert_eq!(
        network.config_url(),
        "//pagead2.googlesyndication.com/getconfig/ama?client=ca-pub-1234&ama_t=amp&url=not%20a%20url"
    );
}

#[test]
fn unknown_type_resolves_to_none() {
    let page = page_with(CANONICAL_URL);
    assert!(resolve("unknowntype", &adsense_element(), &page, &EndpointConfig::default()).is_none());
}

#[test]
fn report_serializes_like_the_individual_outputs() {
    let network = resolve_on("adsense", &adsense_element(), CANONICAL_URL);
    let config = AutoAdsConfig::with_opt_in_status([2]);
    let value = serde_json::to_value(network.report(&PageWindow::new(), Some(&config))).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "network": "adsense",
            "enabled": true,
            "responsive_enabled": true,
            "config_url": network.config_url(),
            "attributes": {"type": "adsense", "data-ad-client": AD_CLIENT},
            "default_ad_constraints": {
                "initialMinSpacing": 500,
                "subsequentMinSpacing": [
                    {"adCount": 3, "spacing": 1000},
                    {"adCount": 6, "spacing": 1500},
                ],
                "maxAdCount": 8,
            },
            "sticky_ad_attributes": {"no-fill": "false"},
        })
    );
}
