//! View location
//!
//! The query-string part of the address the view was opened with. It is
//! injected at start-up, read once, and rewritten whenever the status
//! selection changes so it can be shared to reproduce the same view.

use super::credential::TOKEN_PARAM;
use url::form_urlencoded;

/// Ordered list of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    params: Vec<(String, String)>,
}

impl Location {
    /// Parse a location
    ///
    /// Accepts a bare query (`a=b&c=d`), a query with leading `?`, or a full
    /// URL. For URLs everything after the first `?` is used; a URL without a
    /// query yields an empty location. Any `#fragment` is dropped.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = input.split_once('#').map_or(input, |(head, _)| head);

        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None if input.contains("://") => "",
            None => input,
        };

        let params = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { params }
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in order
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// Replace every `key` entry with `values`
    ///
    /// Other parameters keep their position; the new values are appended.
    pub fn set_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.retain(|(k, _)| k != key);
        self.params
            .extend(values.into_iter().map(|v| (key.to_string(), v.into())));
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode as `a=b&c=d` (without leading `?`)
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Copy of this location without the credential, safe to print or share
    pub fn shareable(&self) -> Self {
        let mut shared = self.clone();
        shared.set_all(TOKEN_PARAM, Vec::<String>::new());
        shared
    }
}
