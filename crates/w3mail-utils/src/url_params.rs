//! Query-string helpers.

use std::collections::BTreeMap;

use url::Url;

use crate::error::Result;

/// Value of query parameter `key`, if present.
///
/// # Errors
///
/// Returns an error if `url` cannot be parsed.
pub fn get_param(url: &str, key: &str) -> Result<Option<String>> {
    let url = Url::parse(url)?;
    Ok(url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned()))
}

/// All query parameters. When a key repeats, the last value wins.
///
/// # Errors
///
/// Returns an error if `url` cannot be parsed.
pub fn query_params(url: &str) -> Result<BTreeMap<String, String>> {
    let url = Url::parse(url)?;
    Ok(url.query_pairs().into_owned().collect())
}

/// Sets query parameters on `base`, replacing existing values for the same
/// keys and keeping all other parameters in order.
///
/// # Errors
///
/// Returns an error if `base` cannot be parsed.
pub fn with_params(base: &str, params: &[(&str, &str)]) -> Result<Url> {
    let mut url = Url::parse(base)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(k, _)| !params.iter().any(|(p, _)| p == k))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(&kept);
        pairs.extend_pairs(params);
    }
    drop_empty_query(&mut url);
    Ok(url)
}

/// Removes every occurrence of `key` from the query string.
///
/// # Errors
///
/// Returns an error if `url` cannot be parsed.
pub fn remove_param(url: &str, key: &str) -> Result<Url> {
    let mut url = Url::parse(url)?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(k, _)| k != key)
        .collect();

    url.query_pairs_mut().clear().extend_pairs(&kept);
    drop_empty_query(&mut url);
    Ok(url)
}

// `query_pairs_mut` leaves a bare `?` behind when nothing is appended.
fn drop_empty_query(url: &mut Url) {
    if url.query() == Some("") {
        url.set_query(None);
    }
}
