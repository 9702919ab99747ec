// Configuration module entry point
// Loads process-wide immutable configuration once at cold start

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    ClientFilterConfig, Config, CorsConfig, FunctionConfig, HttpConfig, LoggingConfig,
    PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the default `calc-gateway.toml` file
    /// (optional) plus `CALC`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("calc-gateway")
    }

    /// Load configuration from specified file path (without extension).
    ///
    /// Precedence, lowest to highest: coded defaults, config file,
    /// environment. List-valued keys (the origin allow-list and the
    /// User-Agent signature lists) are read from the environment as
    /// comma-separated strings, e.g.
    /// `CALC__CORS__ALLOWED_ORIGINS=https://a.test,https://b.test`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("CALC")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("client_filter.blocked_agents")
                    .with_list_parse_key("client_filter.browser_markers")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.backlog", 128)?
            .set_default(
                "cors.allowed_origins",
                vec![
                    "https://calc.example.com",
                    "https://dev.calc.example.com",
                    "http://localhost:5173",
                ],
            )?
            .set_default("client_filter.enabled", true)?
            .set_default("function.name", "basic-calc")?
            .set_default("function.version", "$LATEST")?
            .set_default("function.stage", "v1")?
            .set_default("http.max_body_size", 65_536)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations the handler cannot run with
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.cors.allowed_origins.is_empty() {
            return Err(config::ConfigError::Message(
                "cors.allowed_origins must contain at least one origin".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
