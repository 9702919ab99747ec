// Client filtering module
// Superficial User-Agent sniffing carried over as documented legacy behavior
//
// Any client can spoof its User-Agent, so this is advisory obfuscation
// against casual tool traffic, not a security boundary. Disable it with
// `client_filter.enabled = false`.

use crate::config::ClientFilterConfig;
use crate::handler::error::HandlerError;

/// User-Agent heuristics applied to non-preflight requests.
#[derive(Debug, Clone)]
pub struct ClientFilter {
    enabled: bool,
    blocked_agents: Vec<String>,
    browser_markers: Vec<String>,
}

impl ClientFilter {
    /// Build the filter from configuration, lower-casing both signature
    /// lists once so every request only lower-cases the User-Agent.
    pub fn new(config: &ClientFilterConfig) -> Self {
        Self {
            enabled: config.enabled,
            blocked_agents: lowercase_all(&config.blocked_agents),
            browser_markers: lowercase_all(&config.browser_markers),
        }
    }

    /// Check a request's User-Agent against the signature lists.
    ///
    /// The block-list wins over the browser markers: a User-Agent
    /// containing both `curl` and `chrome` is still rejected. A missing
    /// header matches no browser marker and is rejected as unrecognized.
    pub fn check(&self, user_agent: Option<&str>) -> Result<(), HandlerError> {
        if !self.enabled {
            return Ok(());
        }

        let agent = user_agent.unwrap_or_default().to_lowercase();

        if self
            .blocked_agents
            .iter()
            .any(|signature| agent.contains(signature.as_str()))
        {
            return Err(HandlerError::BlockedAgent);
        }

        if !self
            .browser_markers
            .iter()
            .any(|marker| agent.contains(marker.as_str()))
        {
            return Err(HandlerError::UnrecognizedAgent);
        }

        Ok(())
    }
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
