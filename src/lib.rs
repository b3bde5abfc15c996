pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::loader::{load_registry, ParcelFormat};
pub use app::query::{run_query, Query};
pub use config::{toml_config::RegistryConfig, Settings};
pub use crate::core::{registry::ParcelRegistry, Parcel, ParcelRecord, PostOfficeManagement};
pub use utils::error::{RegistryError, Result};
