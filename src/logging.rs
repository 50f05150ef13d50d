//! Diagnostic logging
//!
//! Logs go to stderr so command output on stdout stays clean. The filter
//! comes from `EXPENSE_LOG` when set, otherwise from the configured level.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "EXPENSE_LOG";

/// Build the filter: `EXPENSE_LOG`, then `fallback`, then `warn`
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fallback_does_not_panic() {
        let _ = filter("not a [valid filter");
        let _ = filter("debug");
    }

    #[test]
    fn test_init_twice() {
        init("warn");
        init("debug");
    }
}
