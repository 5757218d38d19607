//! Structured logging setup for the command-line tool.
//!
//! Logs go to stderr so they never mix with rendered chunks on stdout.
//! `RUST_LOG` or `CHATCHUNK_LOG` override whatever the flags ask for.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted after `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "CHATCHUNK_LOG";

/// Initializes the global subscriber from CLI flags.
///
/// `log_level` wins over `verbose`; a bare level such as `"info"` is scoped
/// to this crate, a full directive such as `"chatchunk=trace,warn"` is used as is.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = filter_directive(verbose, log_level);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

fn filter_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("chatchunk={}", level),
        (true, None) => "chatchunk=debug".to_string(),
        (false, None) => "chatchunk=warn".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(false, None), "chatchunk=warn");
        assert_eq!(filter_directive(true, None), "chatchunk=debug");
        assert_eq!(filter_directive(true, Some("trace")), "chatchunk=trace");
        assert_eq!(
            filter_directive(false, Some("chatchunk=info,warn")),
            "chatchunk=info,warn"
        );
    }
}
