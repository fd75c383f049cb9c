//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install the global subscriber, filtered by `SDT_LOG`.
///
/// Example: `SDT_LOG=sdt::detection=trace,sdt::config=warn`.
///
/// Only the first call does anything. The calculator is a library, so the
/// embedding application may already own the global subscriber; in that case
/// this leaves theirs in place and our events flow to it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV_VAR).ok();
        let filter = filter_from_directives(directives.as_deref());

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Build the filter for an `SDT_LOG` value.
///
/// `None` or directives that fail to parse give `sdt=info`.
pub fn filter_from_directives(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
