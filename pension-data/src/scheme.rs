//! TOML overrides for [`SchemeConfig`].
//!
//! Any field left out keeps its default, so a file only needs the values
//! that differ from the projected rules:
//!
//! ```toml
//! full_age_threshold_months = 462
//! extended_age = { years = 67, months = 0 }
//! window_shortfall = "zero_fill"
//! min_pension = "1100.00"
//! ```

use std::path::Path;

use pension_core::{SchemeConfig, SchemeConfigError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SchemeLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scheme TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid scheme configuration: {0}")]
    Invalid(#[from] SchemeConfigError),
}

/// Parses a scheme override file and validates the merged result.
///
/// An empty string yields [`SchemeConfig::default`].
pub fn load_scheme_from_str(input: &str) -> Result<SchemeConfig, SchemeLoadError> {
    let config: SchemeConfig = toml::from_str(input)?;
    config.validate()?;

    debug!(
        threshold_months = config.full_age_threshold_months,
        shortfall = ?config.window_shortfall,
        "loaded scheme configuration"
    );
    Ok(config)
}

pub fn load_scheme_from_file(path: &Path) -> Result<SchemeConfig, SchemeLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SchemeLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_scheme_from_str(&contents)
}
