//! Query-string URL building with length-bounded truncation.

use ama_config::{AMP_TYPE_PARAM, EndpointConfig};
use ama_core::page::PageContext;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left alone by `encodeURIComponent`: alphanumerics plus `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// One `name=value` pair of a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam<'a> {
    pub name: &'a str,
    /// Skipped when `None`.
    pub value: Option<&'a str>,
    /// Fixed pairs are always emitted whole; only the others are truncated.
    pub fixed: bool,
}

impl<'a> QueryParam<'a> {
    #[must_use]
    pub const fn new(name: &'a str, value: Option<&'a str>) -> Self {
        Self {
            name,
            value,
            fixed: false,
        }
    }

    #[must_use]
    pub const fn fixed(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value: Some(value),
            fixed: true,
        }
    }
}

/// Build `base?name=value&...` with percent-encoded names and values.
///
/// If the result would be longer than `max_length` bytes, room is first set
/// aside for every fixed pair and for `truncation_marker`. The other pairs are
/// then emitted in order until one no longer fits; that one is cut short
/// (never inside a `%XX` escape) and no further non-fixed pair is emitted.
/// Fixed pairs keep their position. The marker goes last. The returned URL is
/// at most `max_length` bytes provided `max_length` can hold the base, the
/// fixed pairs and the marker.
#[must_use]
pub fn build_url(
    base: &str,
    params: &[QueryParam<'_>],
    max_length: usize,
    truncation_marker: &str,
) -> String {
    let encoded: Vec<(String, String, bool)> = params
        .iter()
        .filter_map(|param| {
            param.value.map(|value| {
                (
                    format!("{}=", encode_component(param.name)),
                    encode_component(value),
                    param.fixed,
                )
            })
        })
        .collect();

    let full = join(
        base,
        encoded.iter().map(|(prefix, value, _)| format!("{prefix}{value}")),
    );
    if full.len() <= max_length {
        return full;
    }

    // Every emitted pair costs its length plus one `&`/`?`; the marker takes
    // the last separator slot.
    let fixed_cost: usize = encoded
        .iter()
        .filter(|(_, _, fixed)| *fixed)
        .map(|(prefix, value, _)| prefix.len() + value.len() + 1)
        .sum();
    let mut available = max_length
        .saturating_sub(base.len() + 1 + truncation_marker.len())
        .saturating_sub(fixed_cost);
    let mut pairs = Vec::with_capacity(encoded.len() + 1);
    let mut cut = false;

    for (prefix, value, fixed) in &encoded {
        if *fixed {
            pairs.push(format!("{prefix}{value}"));
            continue;
        }
        if cut {
            continue;
        }

        let cost = prefix.len() + value.len() + 1;
        if cost <= available {
            pairs.push(format!("{prefix}{value}"));
            available -= cost;
            continue;
        }

        cut = true;
        let room = available.saturating_sub(prefix.len() + 1);
        let truncated = trim_partial_escape(&value[..room]);
        if !truncated.is_empty() {
            pairs.push(format!("{prefix}{truncated}"));
        }
    }
    pairs.push(truncation_marker.to_string());

    let url = join(base, pairs.into_iter());
    tracing::debug!(
        full_length = full.len(),
        truncated_length = url.len(),
        max_length,
        "config URL truncated"
    );
    url
}

/// Build the auto-ads config-fetch URL for `client` on `page`.
///
/// `ama_t=amp` is fixed and survives truncation. `url` goes last so a long
/// canonical URL is what gets cut.
#[must_use]
pub fn config_fetch_url(
    endpoint: &EndpointConfig,
    client: Option<&str>,
    page: &PageContext,
) -> String {
    let host = canonical_host(&page.canonical_url);
    let (amp_type_name, amp_type_value) = AMP_TYPE_PARAM;
    build_url(
        &endpoint.config_url_base,
        &[
            QueryParam::new("client", client),
            QueryParam::new("plah", host.as_deref()),
            QueryParam::fixed(amp_type_name, amp_type_value),
            QueryParam::new("url", Some(page.canonical_url.as_str())),
        ],
        endpoint.max_url_length,
        &endpoint.truncation_marker(),
    )
}

/// Hostname of `canonical_url`, if it parses as an absolute URL with a host.
#[must_use]
pub fn canonical_host(canonical_url: &str) -> Option<String> {
    let host = url::Url::parse(canonical_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned));
    if host.is_none() {
        tracing::debug!(canonical_url, "canonical URL has no host; omitting plah");
    }
    host
}

fn join(base: &str, pairs: impl Iterator<Item = String>) -> String {
    let query = pairs.collect::<Vec<_>>().join("&");
    format!("{base}?{query}")
}

/// Drop a trailing `%` or `%X` left behind by cutting an encoded value.
fn trim_partial_escape(encoded: &str) -> &str {
    match encoded.rfind('%') {
        Some(idx) if idx + 3 > encoded.len() => &encoded[..idx],
        _ => encoded,
    }
}
