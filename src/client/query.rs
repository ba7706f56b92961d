//! URL assembly for API calls

use super::Options;
use url::form_urlencoded;

/// Append `params` to `endpoint` as a URL-encoded query string.
///
/// An empty parameter set returns the endpoint unchanged.
pub fn build_url(endpoint: &str, params: &Options) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }
    build_url_pairs(endpoint, params.iter())
}

/// Like [`build_url`], but accepts repeated keys
pub fn build_url_pairs<'a, I>(endpoint: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        serializer.append_pair(key, value);
        any = true;
    }
    if !any {
        return endpoint.to_string();
    }
    format!("{}?{}", endpoint, serializer.finish())
}
