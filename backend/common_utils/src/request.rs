use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    /// GET and DELETE carry their parameters in the query string, every other
    /// method sends them as a form encoded body.
    pub fn sends_params_in_query(&self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }
}

/// Ordered, form encodable request parameters.
pub type RequestParams = Vec<(String, String)>;

#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub params: RequestParams,
}

#[derive(Debug)]
pub struct RequestBuilder {
    pub url: String,
    pub method: Method,
    pub params: RequestParams,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            params: Vec::new(),
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            params: self.params,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use std::str::FromStr;

    use super::*;

    #[test]
    fn query_placement_follows_method() {
        assert!(Method::Get.sends_params_in_query());
        assert!(Method::Delete.sends_params_in_query());
        assert!(!Method::Post.sends_params_in_query());
        assert!(!Method::Put.sends_params_in_query());
        assert!(!Method::Patch.sends_params_in_query());
    }

    #[test]
    fn method_parses_case_insensitively() {
        assert_eq!(Method::from_str("delete").unwrap(), Method::Delete);
        assert_eq!(Method::Post.to_string(), "POST");
    }

    #[test]
    fn builder_keeps_param_order() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://example.com/route")
            .params([("b", "2"), ("a", "1")])
            .build();
        assert_eq!(
            request.params,
            vec![("b".to_string(), "2".to_string()), ("a".to_string(), "1".to_string())]
        );
    }
}
