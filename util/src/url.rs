//! Query parameter access for URLs.

use std::collections::HashMap;

use log::debug;
use ::url::Url;
use percent_encoding::percent_decode_str;

/// Helpers for parsed URLs
pub trait UrlExt {
    /// Query parameters as a map holding the last value given for each name.
    ///
    /// A parameter without `=` removes an earlier value for its name. Names
    /// and values are percent-decoded only; `+` stays a literal plus sign.
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use extkit_util::url::UrlExt;
    ///
    /// let url = Url::parse("https://example.com/?a=1&b=2&a=3").unwrap();
    /// let params = url.query_parameters();
    /// assert_eq!(params["a"], "3");
    /// assert_eq!(params["b"], "2");
    /// ```
    fn query_parameters(&self) -> HashMap<String, String>;
}

impl UrlExt for Url {
    fn query_parameters(&self) -> HashMap<String, String> {
        self.query().map(parse_query).unwrap_or_default()
    }
}

/// [UrlExt::query_parameters] for a URL given as a string; empty if `url` does not parse
pub fn query_parameters(url: &str) -> HashMap<String, String> {
    match Url::parse(url) {
        Ok(url) => url.query_parameters(),
        Err(e) => {
            debug!("Ignoring unparsable URL {url:?}: {e}");
            HashMap::new()
        }
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for item in query.split('&').filter(|item| !item.is_empty()) {
        match item.split_once('=') {
            Some((name, value)) => params.insert(decode(name), decode(value)),
            None => params.remove(&decode(item)),
        };
    }
    params
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}
