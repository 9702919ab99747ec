// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub client_filter: ClientFilterConfig,
    pub function: FunctionConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration for the local front-end
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub backlog: i32,
    pub workers: Option<usize>,
}

/// CORS origin allow-list.
///
/// Ordered; the first entry doubles as the fallback value for
/// `Access-Control-Allow-Origin` when the request origin is not listed.
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Heuristic client filtering configuration.
///
/// User-Agent sniffing is trivially spoofable and kept only as legacy
/// behavior; `enabled = false` turns it off without touching the handler.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientFilterConfig {
    pub enabled: bool,
    /// Tool signatures rejected outright (substring match, lower-case)
    #[serde(default = "default_blocked_agents")]
    pub blocked_agents: Vec<String>,
    /// Browser signatures, at least one of which must be present
    #[serde(default = "default_browser_markers")]
    pub browser_markers: Vec<String>,
}

/// Identity reported by the GET diagnostic endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct FunctionConfig {
    pub name: String,
    pub version: String,
    /// Deployment stage the front-end reports in the request context
    pub stage: String,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

fn default_blocked_agents() -> Vec<String> {
    ["postman", "insomnia", "curl", "wget", "python-requests", "httpie"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_browser_markers() -> Vec<String> {
    ["mozilla", "chrome", "safari", "firefox", "edge"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_access_log_format() -> String {
    "combined".to_string()
}
