//! Request handler module
//!
//! The core of the system: receives one gateway invocation, decides a
//! response from method, parameters, and headers, and always returns a
//! structured response. Validation order per invocation: CORS resolution,
//! OPTIONS preflight short-circuit, User-Agent client filtering, then
//! method dispatch (POST calculator, GET diagnostics, 405 otherwise),
//! with a top-level fault boundary mapping anything unexpected to a 500.

pub mod calculator;
pub mod cors;
pub mod error;
pub mod filter;
pub mod router;

// Re-export main entry point
pub use router::RequestHandler;
