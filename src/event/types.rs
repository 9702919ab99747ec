// Gateway event types module
// Defines the request/response shapes exchanged with the invoking gateway

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One HTTP request as described by the gateway invocation.
///
/// Field names follow the gateway's camelCase wire format. Every field is
/// optional on the wire; `httpMethod` falls back to `GET` when absent.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default = "default_http_method")]
    pub http_method: String,
    /// Raw request headers. Key casing is whatever the client sent;
    /// use [`super::get_header`] for lookups.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// JSON-encoded request body, when present.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub request_context: Option<GatewayRequestContext>,
}

/// Deployment metadata attached to the request by the gateway.
/// Only consumed by the GET diagnostic response.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequestContext {
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub resource_path: Option<String>,
}

/// Host-supplied identity of the running function, surfaced verbatim in
/// the GET diagnostic message.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub function_name: String,
    pub function_version: String,
}

/// Structured response returned to the gateway: status code, header map,
/// and a JSON-encoded body string. No streaming, no binary payloads.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

fn default_http_method() -> String {
    "GET".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialize_full() {
        let raw = r#"{
            "httpMethod": "POST",
            "headers": {"Origin": "https://calc.example.com"},
            "body": "{\"a\":\"1\",\"b\":\"2\",\"operation\":\"add\"}",
            "queryStringParameters": null,
            "requestContext": {"domainName": "abc123.execute-api.test", "stage": "v1"}
        }"#;
        let event: GatewayEvent = serde_json::from_str(raw).expect("valid event");
        assert_eq!(event.http_method, "POST");
        assert_eq!(
            event.headers.get("Origin").map(String::as_str),
            Some("https://calc.example.com")
        );
        assert!(event.body.is_some());
        assert!(event.query_string_parameters.is_none());
        let ctx = event.request_context.expect("context present");
        assert_eq!(ctx.domain_name.as_deref(), Some("abc123.execute-api.test"));
        assert_eq!(ctx.stage.as_deref(), Some("v1"));
        assert!(ctx.resource_path.is_none());
    }

    #[test]
    fn test_event_method_defaults_to_get() {
        let event: GatewayEvent = serde_json::from_str("{}").expect("empty event");
        assert_eq!(event.http_method, "GET");
        assert!(event.headers.is_empty());
        assert!(event.body.is_none());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = GatewayResponse {
            status_code: 200,
            headers: HashMap::new(),
            body: r#"{"result":3.0}"#.to_string(),
        };
        let json = serde_json::to_value(&response).expect("serializable");
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["body"], r#"{"result":3.0}"#);
    }
}
