//! Request routes: a path plus ordered query parameters.

use chrono::{DateTime, Utc};

/// Serialization of a value into a query-string value.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl QueryValue for u32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for i64 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Timestamps go out as epoch seconds.
impl QueryValue for DateTime<Utc> {
    fn to_query_value(&self) -> String {
        self.timestamp().to_string()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// A GET route relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl Route {
    /// Route for a fixed path such as `/v2/aes`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Route whose last segment is a caller-provided id, percent-encoded.
    pub fn with_segment(prefix: &str, segment: &str) -> Self {
        Self::new(format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            urlencoding::encode(segment)
        ))
    }

    /// Append a query parameter.
    pub fn param(mut self, key: &'static str, value: impl QueryValue) -> Self {
        self.query.push((key, value.to_query_value()));
        self
    }

    /// Append a query parameter when present.
    pub fn opt_param<V: QueryValue>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order.
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Value of the first query parameter named `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Absolute URL against `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        for (i, (key, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}
