//! Invocation dispatch module
//!
//! Entry point for handling one gateway event: resolves CORS headers,
//! short-circuits preflights, applies the client filter, and dispatches on
//! the HTTP method. Total: every invocation produces exactly one response,
//! and no failure crosses this boundary as anything but an error response.

use std::collections::HashMap;

use serde_json::json;

use crate::config::Config;
use crate::event::{get_header, GatewayEvent, GatewayResponse, InvocationContext};
use crate::handler::calculator::CalculatorParams;
use crate::handler::cors::CorsPolicy;
use crate::handler::error::HandlerError;
use crate::handler::filter::ClientFilter;
use crate::logger;

/// Immutable request handler, built once at cold start.
///
/// Collapses the historical single-origin and three-origin handler
/// variants into one, parameterized by the origin allow-list and the
/// client-filter toggle.
pub struct RequestHandler {
    cors: CorsPolicy,
    filter: ClientFilter,
    invocation: InvocationContext,
}

impl RequestHandler {
    pub fn new(config: &Config) -> Self {
        Self {
            cors: CorsPolicy::new(&config.cors),
            filter: ClientFilter::new(&config.client_filter),
            invocation: InvocationContext {
                function_name: config.function.name.clone(),
                function_version: config.function.version.clone(),
            },
        }
    }

    /// Handle one invocation. Never panics, never returns early without a
    /// full CORS header set on the response.
    pub fn handle(&self, event: &GatewayEvent) -> GatewayResponse {
        let headers = self
            .cors
            .response_headers(get_header(&event.headers, "origin"));
        let method = event.http_method.to_ascii_uppercase();

        // Preflight short-circuit: the browser is negotiating CORS, so no
        // body, User-Agent, or method validation applies
        if method == "OPTIONS" {
            return respond(
                200,
                headers,
                json!({ "message": "CORS preflight OK" }).to_string(),
            );
        }

        match self.dispatch(event, &method) {
            Ok(body) => respond(200, headers, body),
            Err(err) => {
                if let HandlerError::Fault(details) = &err {
                    logger::log_error(&format!("Invocation fault: {details}"));
                }
                respond(err.status_code(), headers, err.body())
            }
        }
    }

    fn dispatch(&self, event: &GatewayEvent, method: &str) -> Result<String, HandlerError> {
        // Client filter runs before method validation, so a blocked tool
        // sees 403 even on an unsupported verb
        self.filter
            .check(get_header(&event.headers, "user-agent"))?;

        match method {
            "POST" => run_calculator(event),
            "GET" => Ok(self.diagnostics(event)),
            _ => Err(HandlerError::MethodNotAllowed),
        }
    }

    /// Diagnostic echo: function identity plus the endpoint the gateway
    /// reported, each context field defaulted when absent.
    fn diagnostics(&self, event: &GatewayEvent) -> String {
        let ctx = event.request_context.as_ref();
        let domain = ctx
            .and_then(|c| c.domain_name.as_deref())
            .unwrap_or("api.example.com");
        let stage = ctx.and_then(|c| c.stage.as_deref()).unwrap_or("v1");
        let resource = ctx
            .and_then(|c| c.resource_path.as_deref())
            .unwrap_or("/basic-calc");

        let endpoint = format!("{domain}/{stage}{resource}");
        let alias = stage.to_uppercase();
        let message = format!(
            "This is {} lambda called from API {} ... version: {} with {} Alias!",
            self.invocation.function_name, endpoint, self.invocation.function_version, alias
        );
        json!({ "message": message }).to_string()
    }
}

/// POST path: parameters from the JSON body when present and non-empty,
/// else from the query string, else a client error.
fn run_calculator(event: &GatewayEvent) -> Result<String, HandlerError> {
    let params = match event.body.as_deref() {
        Some(body) if !body.is_empty() => CalculatorParams::from_body(body)?,
        _ => match event.query_string_parameters.as_ref() {
            Some(query) if !query.is_empty() => CalculatorParams::from_query(query)?,
            _ => return Err(HandlerError::MissingParameters),
        },
    };

    let result = params.apply()?;
    Ok(json!({ "result": result }).to_string())
}

fn respond(status_code: u16, headers: HashMap<String, String>, body: String) -> GatewayResponse {
    GatewayResponse {
        status_code,
        headers,
        body,
    }
}
