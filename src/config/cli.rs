use crate::app::query::Query;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "parcel-registry")]
#[command(about = "Query a fixed registry of postal parcels")]
pub struct CliConfig {
    #[arg(long, help = "Parcel source file (.json or .csv)")]
    pub parcels: Option<String>,

    #[arg(long, help = "Source format, inferred from the extension when omitted")]
    pub format: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub query: Query,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.parcels {
            validate_path("parcels", path)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(format) = &self.format {
            validate_one_of(
                "format",
                &format.to_ascii_lowercase(),
                &crate::adapters::loader::ParcelFormat::NAMES,
            )?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn parcels_path(&self) -> &str {
        self.parcels.as_deref().unwrap_or_default()
    }

    fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}
