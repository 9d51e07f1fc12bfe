//! Element attribute lookup and output attribute maps.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Attribute names read from the host `amp-auto-ads` element.
pub mod names {
    pub const AD_CLIENT: &str = "data-ad-client";
    pub const AD_HOST: &str = "data-ad-host";
    pub const AD_HOST_CHANNEL: &str = "data-ad-host-channel";
    pub const AD_LEGACY_CLIENT: &str = "data-ad-legacy-client";
    pub const JSON: &str = "data-json";
    pub const SLOT: &str = "data-slot";
    pub const EXPERIMENT: &str = "data-experiment";
}

/// HTML attributes to emit on a generated ad tag, ordered by name.
pub type AttributeMap = BTreeMap<String, String>;

/// String-keyed attribute lookup on a host element.
///
/// Strategies copy what they need out of the source when they are built, so
/// implementations only have to answer lookups at construction time.
pub trait AttributeSource {
    /// Raw value of `name`, or `None` if the attribute is not set.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Value of `name` if it is set to a non-empty string.
    fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|value| !value.is_empty())
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: std::hash::BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Owned attribute set for an `amp-auto-ads` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementAttributes {
    values: BTreeMap<String, String>,
}

impl ElementAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl AttributeSource for ElementAttributes {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ElementAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Split a `name=value` pair on the first `=`.
///
/// The value may be empty or contain further `=` characters; the name may not
/// be empty.
///
/// # Errors
///
/// Returns [`CoreError::InvalidPair`] if there is no `=` or the name is empty.
pub fn split_pair(input: &str) -> Result<(String, String), CoreError> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(CoreError::InvalidPair {
            input: input.to_string(),
        }),
    }
}
