//! Log subscriber setup
//!
//! Filter precedence: `RUST_LOG`, then `CALCPAD_LOG`, then the level implied
//! by the verbosity flags. Logs go to stderr; stdout carries only state.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Environment variable consulted when `RUST_LOG` is unset
pub const LOG_ENV: &str = "CALCPAD_LOG";

/// Builds the log filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber; later calls are ignored
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Debug);
        tracing::debug!("still alive");
    }

    #[test]
    fn test_env_filter_builds_for_every_level() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            let filter = env_filter(verbosity);
            assert!(!filter.to_string().is_empty());
        }
    }
}
