//! Telemetry helpers for hosts embedding `series-plot`.
//!
//! Nothing here runs implicitly. A host either calls one of these helpers
//! once at startup or wires its own `tracing` subscriber.

/// Filter applied when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "series_plot=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive
/// such as `"series_plot=trace"` for per-frame diagnostics.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
