//! Launcher diagnostics via `tracing`: `[LEVEL] message`, no timestamps, no
//! module targets.
//!
//! Output goes to stderr by default. The `log-file` cargo feature redirects
//! it to `larkspur.log` in the working directory (append mode) instead;
//! `init` must run before anything else is printed.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

#[cfg(feature = "log-file")]
const LOG_FILE: &str = "larkspur.log";

/// Install the global subscriber. `verbose` lowers the level to DEBUG so the
/// per-stage pipeline traces become visible.
pub fn init(verbose: bool) {
    let filter = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    #[cfg(feature = "log-file")]
    {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE);
        if let Ok(file) = file {
            install(std::sync::Arc::new(file), filter);
            return;
        }
        // Unwritable log file: fall through to stderr rather than stay mute.
    }

    install(std::io::stderr, filter);
}

fn install<W>(writer: W, filter: LevelFilter)
where
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(writer)
        .with_filter(filter);
    Registry::default().with(layer).init();
}
