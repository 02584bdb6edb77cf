//! Page query parameters and the request query string built from them.
//!
//! The page's own query string is passed through to the chart data endpoint.
//! Keys and values are kept exactly as they appear in the page URL (no
//! decoding) and are percent-encoded once when the request string is built.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Parameter carrying the number of samples the backend should return.
pub const SAMPLES_KEY: &str = "samples";

/// Characters left untouched by URI component encoding:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
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

/// Percent-encode a single key or value as a URI component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Ordered key/value pairs parsed from a page query string.
///
/// A key that appears twice keeps its first position and its last value.
/// A piece without `=` has no value. Only the text between the first and
/// second `=` of a piece is its value; anything after a second `=` is
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParameters {
    /// Parse `location.search`, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let mut params = Self::default();
        let search = search.strip_prefix('?').unwrap_or(search);
        for piece in search.split('&').filter(|piece| !piece.is_empty()) {
            let mut parts = piece.split('=');
            let key = parts.next().unwrap_or_default();
            params.insert(key, parts.next().map(str::to_string));
        }
        params
    }

    fn insert(&mut self, key: &str, value: Option<String>) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.insert(key, Some(value.into()));
    }

    /// Value of `key`. `None` when the key is absent or has no `=`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Insert `samples=<default>` unless the page already asks for a
    /// non-empty sample count.
    pub fn with_default_samples(mut self, default_samples: u32) -> Self {
        if self.get(SAMPLES_KEY).map_or(true, str::is_empty) {
            self.set(SAMPLES_KEY, default_samples.to_string());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// `?`-prefixed page query with keys and values written back exactly
    /// as parsed, for links that reload the page. A missing value is
    /// written as the bare key.
    pub fn to_page_query(&self) -> String {
        let joined = self
            .iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{key}={value}"),
                None => key.to_string(),
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }

    /// `?`-prefixed, `&`-joined string with every key and value encoded
    /// independently. A missing value is written as `key=`.
    pub fn to_query_string(&self) -> String {
        let joined = self
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    encode_component(key),
                    encode_component(value.unwrap_or(""))
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

/// Build the chart data query string for the current page.
///
/// `search` is the page's `location.search` (possibly empty).
pub fn build_query_string(search: &str, default_samples: u32) -> String {
    let query = QueryParameters::parse(search)
        .with_default_samples(default_samples)
        .to_query_string();
    log::debug!("chart data query: {}", query);
    query
}
