// CORS resolution module
// Fixed origin allow-list with the first entry as the fallback value

use std::collections::HashMap;

use crate::config::CorsConfig;

/// Methods the gateway accepts for the calculator resource
const ALLOW_METHODS: &str = "POST,OPTIONS";

/// Request headers a browser may send on the cross-origin call
const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Ordered origin allow-list resolved once at cold start.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    /// Build the policy from configuration. The allow-list is validated
    /// non-empty at config load.
    pub fn new(config: &CorsConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins.clone(),
        }
    }

    /// Pick the `Access-Control-Allow-Origin` value for a request.
    ///
    /// A listed origin is echoed back; anything else (including a missing
    /// `Origin` header) falls back to the first allow-list entry so the
    /// response never reflects an arbitrary origin.
    pub fn resolve_origin(&self, request_origin: Option<&str>) -> &str {
        request_origin
            .and_then(|origin| {
                self.allowed_origins
                    .iter()
                    .find(|allowed| allowed.as_str() == origin)
            })
            .unwrap_or(&self.allowed_origins[0])
            .as_str()
    }

    /// Full header set attached to every response in the handler path.
    pub fn response_headers(&self, request_origin: Option<&str>) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            self.resolve_origin(request_origin).to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            ALLOW_METHODS.to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        );
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CorsPolicy {
        CorsPolicy::new(&CorsConfig {
            allowed_origins: vec![
                "https://calc.example.com".to_string(),
                "https://dev.calc.example.com".to_string(),
                "http://localhost:5173".to_string(),
            ],
        })
    }

    #[test]
    fn test_listed_origin_echoed() {
        let policy = policy();
        assert_eq!(
            policy.resolve_origin(Some("https://dev.calc.example.com")),
            "https://dev.calc.example.com"
        );
        assert_eq!(
            policy.resolve_origin(Some("http://localhost:5173")),
            "http://localhost:5173"
        );
    }

    #[test]
    fn test_unlisted_origin_falls_back_to_first() {
        let policy = policy();
        assert_eq!(
            policy.resolve_origin(Some("https://evil.example.net")),
            "https://calc.example.com"
        );
    }

    #[test]
    fn test_missing_origin_falls_back_to_first() {
        assert_eq!(policy().resolve_origin(None), "https://calc.example.com");
    }

    #[test]
    fn test_response_headers_fixed_set() {
        let headers = policy().response_headers(None);
        assert_eq!(
            headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Methods").map(String::as_str),
            Some("POST,OPTIONS")
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Headers").map(String::as_str),
            Some("Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token")
        );
        assert_eq!(
            headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("https://calc.example.com")
        );
    }
}
