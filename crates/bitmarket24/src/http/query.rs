/*
[INPUT]:  Ordered optional query parameters and multi-valued filters
[OUTPUT]: Encoded query strings and endpoint paths
[POS]:    HTTP layer - query string construction shared by all endpoints
[UPDATE]: When the wire format of query strings changes
*/

use url::form_urlencoded;

/// Ordered query parameters
///
/// Absent values are dropped, the remainder is form-encoded in insertion
/// order. Multi-valued keys are written afterwards as repeated `key=value`
/// pairs with the key kept verbatim (e.g. `status[]=new&status[]=active`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, Option<String>)>,
    repeated: Vec<(&'static str, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single parameter; `None` is skipped when encoding
    pub fn push<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        self.pairs.push((key, value.map(|v| v.to_string())));
        self
    }

    /// Append a repeated key, one pair per value
    pub fn push_many<I, V>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if !values.is_empty() {
            self.repeated.push((key, values));
        }
        self
    }

    /// Encode to a query string without the leading `?`
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            if let Some(value) = value {
                serializer.append_pair(key, value);
            }
        }
        let mut query = serializer.finish();

        for (key, values) in &self.repeated {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(key);
                query.push('=');
                query.extend(form_urlencoded::byte_serialize(value.as_bytes()));
            }
        }

        query
    }

    /// `path` with the encoded query appended, or `path` alone when empty
    pub fn to_endpoint(&self, path: &str) -> String {
        let query = self.encode();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}
