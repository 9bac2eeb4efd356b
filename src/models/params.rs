//! Ordered query parameters.
//!
//! Every tagging endpoint takes its input from the query string. [`Params`]
//! keeps the pairs in insertion order so the generated URL is deterministic.

use crate::{Error, Platform, Result};

/// Name of the parameter that overrides the configured platform.
pub const PLATFORM_PARAM: &str = "platform";

/// An ordered list of `name=value` query parameters.
///
/// Names are not de-duplicated and values are always strings.
///
/// # Example
///
/// ```
/// use kuvut_tagging::Params;
///
/// let params = Params::new()
///     .with("tag", "vip")
///     .with("limit", "10")
///     .platform("mobile");
///
/// assert_eq!(params.get("tag"), Some("vip"));
/// assert_eq!(params.platform_override(), Some("mobile"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter and return the list.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Override the configured platform for this call.
    pub fn platform(self, platform: impl Into<Platform>) -> Self {
        let platform: Platform = platform.into();
        self.with(PLATFORM_PARAM, platform)
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The per-call platform, if one was given and is not empty.
    pub fn platform_override(&self) -> Option<&str> {
        self.get(PLATFORM_PARAM).filter(|p| !p.is_empty())
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append every pair of `other`, keeping its order.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Check that each name in `required` has a non-empty value.
    ///
    /// Names are checked in the given order and the first missing one is
    /// reported.
    pub fn require(&self, required: &[&str]) -> Result<()> {
        for name in required {
            match self.get(name) {
                Some(value) if !value.is_empty() => {}
                _ => return Err(Error::MissingParameter((*name).to_string())),
            }
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Conversion into the query parameters of a request.
///
/// Implemented by [`Params`] itself and by the typed request structs in
/// [`crate::models::requests`].
pub trait IntoParams {
    /// Produce the ordered parameter list.
    fn into_params(self) -> Params;
}

impl IntoParams for Params {
    fn into_params(self) -> Params {
        self
    }
}

impl<K, V, const N: usize> IntoParams for [(K, V); N]
where
    K: Into<String>,
    V: Into<String>,
{
    fn into_params(self) -> Params {
        self.into()
    }
}
