//! `tracing` output for the browser build.
//!
//! Events from the app and the API client go to the devtools console, with
//! each level routed to the matching `console.*` method. Dependencies only
//! report errors.

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, Layer, prelude::*, registry::LookupSpan};
use tracing_web::MakeWebConsoleWriter;

/// Directives for the page's log filter.
const LOG_FILTER: &str = "error,ui=debug,payloads=debug";

/// Install the console subscriber. Call before mounting the app so the first
/// fetch is logged.
pub fn init_logging() {
    let initialized = tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(console_layer())
        .try_init();

    match initialized {
        Ok(()) => tracing::info!(filter = LOG_FILTER, "Console logging ready"),
        Err(e) => tracing::warn!("Console logging was set up twice: {e}"),
    }
}

fn console_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // Browsers have no clock through std and render ANSI escapes literally.
    // The console method already shows the level.
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_line_number(true)
        .with_target(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_is_valid() {
        let filter: EnvFilter = LOG_FILTER.parse().expect("valid directives");
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }
}
