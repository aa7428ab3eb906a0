//! Tracing subscriber bootstrap for embedding programs and tests
//!
//! The engines only emit `tracing` events; installing a subscriber is the
//! consumer's choice. `init_tracing` wires up the usual stderr subscriber
//! with an env-filter, honoring the `SKEIN_LOG` environment variable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global stderr subscriber.
///
/// The filter directive is taken from `RUST_LOG`, then `SKEIN_LOG`, then
/// `level` (a bare level like `"debug"` applies to this crate only).
/// Fails if a global subscriber is already set.
pub fn init_tracing(level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("SKEIN_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("skein={level}")
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr).with_ansi(false))
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
