//! Query-string URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Params, PLATFORM_PARAM};
use crate::{Error, Result};

/// RFC 3986 unreserved characters stay as they are; everything else,
/// including spaces, is percent-encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query-string component.
///
/// ```
/// use kuvut_tagging::client::encode_component;
///
/// assert_eq!(encode_component("VIP users"), "VIP%20users");
/// assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
/// ```
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Pick the platform for a call: a non-empty `platform` parameter wins over
/// the configured default.
pub fn resolve_platform<'a>(params: &'a Params, default: Option<&'a str>) -> Result<&'a str> {
    params
        .platform_override()
        .or(default.filter(|p| !p.is_empty()))
        .ok_or_else(|| Error::MissingParameter(PLATFORM_PARAM.to_string()))
}

/// Build `base + path + "?platform=" + platform`, then append every other
/// parameter as `&name=value` in insertion order.
///
/// `platform` entries in `params` are skipped since the platform always
/// leads the query.
///
/// ```
/// use kuvut_tagging::client::build_url;
/// use kuvut_tagging::Params;
///
/// let url = build_url(
///     "https://tagging.kuvut.com/api/1.0",
///     "/tag/get/",
///     "web",
///     &Params::new().with("tag", "vip"),
/// );
/// assert_eq!(url, "https://tagging.kuvut.com/api/1.0/tag/get/?platform=web&tag=vip");
/// ```
pub fn build_url(base_url: &str, path: &str, platform: &str, params: &Params) -> String {
    let mut url = format!(
        "{}{}?{}={}",
        base_url,
        path,
        PLATFORM_PARAM,
        encode_component(platform)
    );

    for (name, value) in params.iter().filter(|(name, _)| *name != PLATFORM_PARAM) {
        url.push('&');
        url.push_str(&encode_component(name));
        url.push('=');
        url.push_str(&encode_component(value));
    }

    url
}
