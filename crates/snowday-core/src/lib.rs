pub mod config;
pub mod error;
pub mod sequence;

pub use config::{Config, ForecastConfig, GeocoderConfig, HttpConfig, ValidationResult};
pub use error::{AppError, ConfigError, ForecastError, NetworkError, ReqwestErrorExt};
pub use sequence::{LatestResult, RequestSequence, RequestTicket};

use anyhow::Result;

/// Initialize logging for a process embedding SnowDay.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls leave the first subscriber in place.
pub fn init() -> Result<()> {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("SnowDay core initialized");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_repeatable() {
        assert!(super::init().is_ok());
        assert!(super::init().is_ok());
    }
}
