//! Logger module
//!
//! Logging utilities for the gateway front-end:
//! - Server lifecycle logging
//! - Access logging (combined or JSON format)
//! - Error and warning logging
//!
//! Info and access lines go to stdout, errors and warnings to stderr.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Calculator gateway started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!(
        "Allowed origins: {}",
        config.cors.allowed_origins.join(", ")
    );
    println!(
        "Client filter: {}",
        if config.client_filter.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log a formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
