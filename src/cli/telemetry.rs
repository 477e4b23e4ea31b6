use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the number of `-v` flags
#[must_use]
pub const fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "dbprobe=warn",
        1 => "dbprobe=info",
        2 => "dbprobe=debug",
        _ => "dbprobe=trace,sqlx=debug",
    }
}

/// Install the global subscriber, logging to stderr
///
/// Without `-v`, `RUST_LOG` is honoured when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(verbosity: u8) -> Result<()> {
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(0)))
    } else {
        EnvFilter::new(directive(verbosity))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
