//! Tracing setup for answerflow.

use tracing_subscriber::EnvFilter;

/// Installs a global tracing subscriber with an env-filtered format layer.
///
/// Filtering follows `RUST_LOG` and defaults to `info` for this crate.
/// Calling this more than once is a no-op; the second install attempt is
/// ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("answerflow=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
