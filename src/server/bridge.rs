//! Request bridge module
//!
//! Adapts one wire HTTP request into the gateway invocation contract,
//! invokes the handler, and translates the structured response back onto
//! the wire. In a managed deployment the gateway does this adaptation;
//! here the front-end fills the same event fields from the real request:
//! method, headers, body, query string, and a request context assembled
//! from the `Host` header and the configured stage.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};

use crate::config::AppState;
use crate::event::{GatewayEvent, GatewayRequestContext};
use crate::http;
use crate::logger;
use crate::logger::AccessLogEntry;

/// Serve one request end to end.
pub async fn serve(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // Content-Length guard before reading anything
    if let Some(response) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(response);
    }

    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().as_str().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    let event = match build_event(req, &state).await {
        Ok(event) => event,
        Err(detail) => {
            logger::log_error(&format!("Failed to read request body: {detail}"));
            return Ok(http::build_500_response());
        }
    };

    let gateway_response = state.handler.handle(&event);

    entry.status = gateway_response.status_code;
    entry.body_bytes = gateway_response.body.len();
    if state.config.logging.access_log {
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(http::from_gateway(&gateway_response))
}

/// Build the invocation event from a wire request.
///
/// Headers with non-UTF-8 values are dropped rather than failing the
/// request; the handler treats them as absent.
async fn build_event(req: Request<Incoming>, state: &AppState) -> Result<GatewayEvent, String> {
    let http_method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query_string_parameters = req.uri().query().map(parse_query);

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect();

    let domain_name = headers
        .get("host")
        .map(|host| host.split(':').next().unwrap_or(host).to_string());

    let body_bytes = req
        .into_body()
        .collect()
        .await
        .map_err(|e| e.to_string())?
        .to_bytes();
    let body = if body_bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body_bytes).into_owned())
    };

    Ok(GatewayEvent {
        http_method,
        headers,
        body,
        query_string_parameters,
        request_context: Some(GatewayRequestContext {
            domain_name,
            stage: Some(state.config.function.stage.clone()),
            resource_path: Some(path),
        }),
    })
}

/// Validate the Content-Length header and return 413 if it exceeds the
/// configured maximum
fn check_body_size(req: &Request<Incoming>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let Ok(size_str) = content_length.to_str() else {
        logger::log_warning("Content-Length header contains non-ASCII characters");
        return None;
    };

    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

/// Parse a raw query string into a parameter map, decoding percent-escapes
/// and `+` as space. A key without `=` maps to an empty value.
fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (percent_decode(key), percent_decode(value)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = (
                    char::from(bytes[i + 1]).to_digit(16),
                    char::from(bytes[i + 2]).to_digit(16),
                );
                if let (Some(hi), Some(lo)) = hex {
                    // to_digit(16) returns at most 15, so this fits a byte
                    #[allow(clippy::cast_possible_truncation)]
                    decoded.push((hi * 16 + lo) as u8);
                    i += 3;
                } else {
                    decoded.push(b'%');
                    i += 1;
                }
            }
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}
