// Application state module
// Bundles the loaded configuration with the handler built from it

use crate::handler::RequestHandler;

use super::Config;

/// Shared application state, constructed once at cold start and passed
/// to every connection behind an `Arc`. Nothing in here mutates after
/// construction.
pub struct AppState {
    pub config: Config,
    pub handler: RequestHandler,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let handler = RequestHandler::new(&config);
        Self { config, handler }
    }
}
