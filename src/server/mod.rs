// Server module entry
// Local HTTP front-end standing in for the managed gateway: it adapts wire
// requests into the invocation contract and the handler's responses back

pub mod bridge;
pub mod connection;
pub mod listener;

// Re-export commonly used entry points
pub use connection::accept_connection;
pub use listener::bind_listener;
