// Gateway event module entry
// Typed view of the invocation contract supplied by the API gateway

mod headers;
mod types;

// Re-export public types
pub use headers::get_header;
pub use types::{GatewayEvent, GatewayRequestContext, GatewayResponse, InvocationContext};
