//! HTTP response building module
//!
//! Translates the handler's structured responses onto the wire and provides
//! the front-end's own guard responses. Builders never panic: a build
//! failure is logged and degrades to a plain 500.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::event::GatewayResponse;

/// Convert a structured gateway response into a wire response.
pub fn from_gateway(response: &GatewayResponse) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
        .body(Full::new(Bytes::from(response.body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("gateway", &e);
            fallback_500()
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"error":"Payload too large"}"#,
        )))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            fallback_500()
        })
}

/// Build the front-end's own 500 response, used when the request cannot
/// even be turned into an invocation (e.g. the body stream fails)
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(
            r#"{"error":"Something went wrong"}"#,
        )))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            fallback_500()
        })
}

fn fallback_500() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
