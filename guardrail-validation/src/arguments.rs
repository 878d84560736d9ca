// Loosely-typed view of a request's bound arguments

use guardrail_core::HttpRequest;
use serde_json::Value;
use std::collections::HashMap;

/// Arguments bound from an incoming request, keyed by parameter name.
///
/// Values are kept untyped; rules work on the textual form via [`text_of`].
/// Built per request and dropped after the validation step, never retained.
///
/// [`text_of`]: RequestArguments::text_of
#[derive(Debug, Clone, Default)]
pub struct RequestArguments {
    values: HashMap<String, Value>,
}

impl RequestArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather the bound path and query parameters of a request.
    ///
    /// Path parameters win over query parameters of the same name.
    pub fn from_request(request: &HttpRequest) -> Self {
        let mut arguments = Self::new();
        for (name, value) in &request.query_params {
            arguments.insert(name.clone(), value.clone());
        }
        for (name, value) in &request.path_params {
            arguments.insert(name.clone(), value.clone());
        }
        arguments
    }

    /// Bind a value to a parameter name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Get the raw value bound to a parameter name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The textual representation of the value bound to `name`.
    ///
    /// Strings are returned unquoted; other values render as their JSON text.
    /// An absent key or a null value has no textual form.
    pub fn text_of(&self, name: &str) -> Option<String> {
        match self.values.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(value) => Some(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_string_is_unquoted() {
        let mut arguments = RequestArguments::new();
        arguments.insert("y", "5");
        assert_eq!(arguments.text_of("y").as_deref(), Some("5"));
    }

    #[test]
    fn test_text_of_number() {
        let mut arguments = RequestArguments::new();
        arguments.insert("y", 42);
        assert_eq!(arguments.text_of("y").as_deref(), Some("42"));
    }

    #[test]
    fn test_text_of_absent_and_null() {
        let mut arguments = RequestArguments::new();
        assert_eq!(arguments.text_of("y"), None);

        arguments.insert("y", Value::Null);
        assert_eq!(arguments.text_of("y"), None);
    }

    #[test]
    fn test_from_request_merges_params() {
        let mut request = HttpRequest::new("GET", "/div/10/5");
        request.path_params.insert("x".to_string(), "10".to_string());
        request.path_params.insert("y".to_string(), "5".to_string());
        request
            .query_params
            .insert("verbose".to_string(), "1".to_string());

        let arguments = RequestArguments::from_request(&request);
        assert_eq!(arguments.len(), 3);
        assert_eq!(arguments.text_of("y").as_deref(), Some("5"));
        assert_eq!(arguments.text_of("verbose").as_deref(), Some("1"));
    }

    #[test]
    fn test_path_param_wins_over_query() {
        let mut request = HttpRequest::new("GET", "/div/10/5");
        request.path_params.insert("y".to_string(), "5".to_string());
        request
            .query_params
            .insert("y".to_string(), "shadowed".to_string());

        let arguments = RequestArguments::from_request(&request);
        assert_eq!(arguments.text_of("y").as_deref(), Some("5"));
    }
}
