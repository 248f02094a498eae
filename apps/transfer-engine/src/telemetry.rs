//! Tracing Setup
//!
//! Initializes console tracing for the transfer engine.
//!
//! # Configuration
//!
//! - `RUST_LOG`: standard env-filter directives (default: `info`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use transfer_engine::telemetry::init_telemetry;
//!
//! fn main() {
//!     init_telemetry();
//!     // ... application code
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Initialize console tracing with an environment-driven filter.
///
/// Safe to call more than once; subsequent calls are no-ops, which
/// keeps test binaries from fighting over the global subscriber.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_telemetry();
        init_telemetry();
    }
}
