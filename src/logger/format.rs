//! Access log format module
//!
//! Supports two formats:
//! - `combined` (Apache/Nginx combined format)
//! - `json` (JSON structured logging)

use chrono::Local;

/// Access log entry for one handled request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
    /// User-Agent header
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    /// Create a new access log entry with current timestamp
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            query: None,
            status: 200,
            body_bytes: 0,
            user_agent: None,
        }
    }

    /// Format the log entry; anything other than `json` formats as combined
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_combined(),
        }
    }

    /// Apache/Nginx Combined Log Format
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent "-" "$http_user_agent"`
    fn format_combined(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}{} HTTP/1.1\" {} {} \"-\" \"{}\"",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.query
                .as_ref()
                .map(|q| format!("?{q}"))
                .unwrap_or_default(),
            self.status,
            self.body_bytes,
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }

    /// JSON structured log format
    fn format_json(&self) -> String {
        serde_json::json!({
            "remote_addr": self.remote_addr,
            "time": self.time.to_rfc3339(),
            "method": self.method,
            "path": self.path,
            "query": self.query,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "user_agent": self.user_agent,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "192.0.2.10".to_string(),
            "POST".to_string(),
            "/basic-calc".to_string(),
        );
        entry.status = 200;
        entry.body_bytes = 14;
        entry.user_agent = Some("Mozilla/5.0".to_string());
        entry
    }

    #[test]
    fn test_combined_format() {
        let line = entry().format("combined");
        assert!(line.starts_with("192.0.2.10 - - ["));
        assert!(line.contains("\"POST /basic-calc HTTP/1.1\" 200 14"));
        assert!(line.ends_with("\"-\" \"Mozilla/5.0\""));
    }

    #[test]
    fn test_combined_format_with_query() {
        let mut e = entry();
        e.query = Some("a=1&b=2&operation=add".to_string());
        let line = e.format("combined");
        assert!(line.contains("/basic-calc?a=1&b=2&operation=add"));
    }

    #[test]
    fn test_json_format() {
        let line = entry().format("json");
        let value: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");
        assert_eq!(value["remote_addr"], "192.0.2.10");
        assert_eq!(value["method"], "POST");
        assert_eq!(value["status"], 200);
        assert_eq!(value["query"], serde_json::Value::Null);
    }

    #[test]
    fn test_unknown_format_falls_back_to_combined() {
        let e = entry();
        assert_eq!(e.format("common"), e.format("combined"));
    }
}
