//! `tracing` output for the browser.
//!
//! Events are formatted by the fmt layer and written to the devtools console
//! at their level; spans also show up on the Performance timeline.

use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Parse the filter directives, falling back to `info` when they are invalid.
pub fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the panic hook and the global subscriber. Safe to call twice.
pub fn init(filter: &str) {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        // std::time is unavailable in the browser
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    let _ = tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt_layer)
        .with(perf_layer)
        .try_init();
}
