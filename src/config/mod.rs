#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::loader::ParcelFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{RegistryError, Result};

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Effective settings after merging the config file with command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub parcels_path: String,
    pub format: Option<ParcelFormat>,
    pub log_level: String,
    pub json_logs: bool,
}

impl Settings {
    /// Builds settings from a source, letting `overrides` win over `base`.
    pub fn merge(
        base: Option<&toml_config::RegistryConfig>,
        overrides: &dyn ConfigProvider,
        verbose: bool,
        json_logs: bool,
    ) -> Result<Self> {
        let parcels_path = if !overrides.parcels_path().is_empty() {
            overrides.parcels_path().to_string()
        } else if let Some(base) = base {
            base.parcels_path().to_string()
        } else {
            return Err(RegistryError::MissingConfigError {
                field: "parcels".to_string(),
            });
        };

        let format = overrides
            .format()
            .or_else(|| base.and_then(|b| b.format()))
            .map(str::parse::<ParcelFormat>)
            .transpose()?;

        let logging = base.and_then(|b| b.logging.as_ref());
        let log_level = if verbose {
            "debug".to_string()
        } else {
            logging
                .and_then(|l| l.level.clone())
                .unwrap_or_else(|| "info".to_string())
        };
        let json_logs = json_logs || logging.and_then(|l| l.json).unwrap_or(false);

        Ok(Self {
            parcels_path,
            format,
            log_level,
            json_logs,
        })
    }
}
