//! Subscriber setup for applications embedding the platform modules
//!
//! The modules only emit `tracing` events. An application that wants them
//! printed calls [`init`] once at startup, or installs its own subscriber.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset: file and image operations at info,
/// everything else at warn.
pub const DEFAULT_FILTER: &str = "warn,platform_fs=info,platform_image=info";

/// Install a compact stderr subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with(DEFAULT_FILTER)
}

/// Like [`init`], with `fallback` used when `RUST_LOG` is unset or invalid.
pub fn init_with(fallback: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .try_init()?;

    tracing::debug!(fallback, "Logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn second_init_fails() {
        let _ = init();
        assert!(init_with("debug").is_err());
    }
}
