//! Replayable request description.
//!
//! A request that hits a 401 is sent a second time after the refresh, so the
//! pipeline keeps its parts instead of a one-shot `reqwest::RequestBuilder`.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::{ApiError, Result};

#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
    pub(crate) refresh_on_unauthorized: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            refresh_on_unauthorized: true,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append query parameters from a serializable struct.
    ///
    /// Null and empty-string values are left out; arrays become repeated keys.
    pub(crate) fn query<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        let Value::Object(fields) = serde_json::to_value(params)? else {
            return Err(ApiError::Validation(
                "Query parameters must serialize to an object".to_string(),
            ));
        };

        for (key, value) in fields {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(item) {
                            self.query.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        self.query.push((key, text));
                    }
                }
            }
        }
        Ok(self)
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Auth endpoints answer 401 for bad credentials; that must reach the
    /// caller instead of starting a refresh.
    pub(crate) fn without_refresh(mut self) -> Self {
        self.refresh_on_unauthorized = false;
        self
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Check an identifier before it goes into a URL path.
pub(crate) fn path_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::Validation("Identifier cannot be empty".to_string()));
    }
    if id.contains(['/', '?', '#', '%']) || id.chars().any(char::is_whitespace) {
        return Err(ApiError::Validation(format!("Invalid identifier: {id}")));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProductFilters;

    /// Query pairs sorted by key; serde_json objects do not keep field order.
    fn sorted(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn query_skips_empty_values() {
        #[derive(Serialize)]
        struct Params {
            status: &'static str,
            brand: &'static str,
            page: Option<u32>,
            limit: u32,
            is_active: bool,
        }

        let request = ApiRequest::get("/users")
            .query(&Params {
                status: "Pending",
                brand: "",
                page: None,
                limit: 10,
                is_active: false,
            })
            .unwrap();

        assert_eq!(
            sorted(&request.query),
            vec![("is_active", "false"), ("limit", "10"), ("status", "Pending")]
        );
    }

    #[test]
    fn filters_keep_wire_names() {
        let filters = ProductFilters {
            product_type: Some("battery".to_string()),
            brand: Some(String::new()),
            page_size: Some(20),
            ..Default::default()
        };
        let request = ApiRequest::get("/products/admin").query(&filters).unwrap();

        assert_eq!(
            sorted(&request.query),
            vec![("pageSize", "20"), ("type", "battery")]
        );
    }

    #[test]
    fn non_object_query_is_rejected() {
        assert!(ApiRequest::get("/x").query(&[1, 2]).is_err());
    }

    #[test]
    fn path_ids_are_checked() {
        assert_eq!(path_id(" 64b7f0c2 ").unwrap(), "64b7f0c2");
        assert!(path_id("").is_err());
        assert!(path_id("../admin").is_err());
        assert!(path_id("a b").is_err());
    }
}
