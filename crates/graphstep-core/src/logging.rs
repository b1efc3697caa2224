//! Structured logging for graphstep
//!
//! Filter precedence: `GRAPHSTEP_LOG`, then `RUST_LOG`, then the level chosen
//! on the command line. All log output goes to stderr so stdout stays
//! machine-readable.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV_VAR: &str = "GRAPHSTEP_LOG";

/// Emit a trace event carrying the time elapsed since `start`.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let snapshots = algorithm.run(&graph)?;
/// trace_time!(start, "run_algorithm", snapshots = snapshots.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber
///
/// `log_level` wins over `verbose`; with neither, only warnings are shown.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });

    let json_layer = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
    });
    let text_layer = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    Ok(())
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directive_for(level)))
}

/// Scope a bare level to graphstep's crates; pass full directives through
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphstep={level},graphstep_core={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_bare_level() {
        assert_eq!(
            directive_for("debug"),
            "graphstep=debug,graphstep_core=debug"
        );
    }

    #[test]
    fn test_directive_for_full_directive() {
        assert_eq!(directive_for("graphstep_core=trace"), "graphstep_core=trace");
    }
}
