use clap::Parser;
use parcel_registry::config::toml_config::RegistryConfig;
use parcel_registry::utils::{logger, validation::Validate};
use parcel_registry::{load_registry, run_query, CliConfig, RegistryError, Settings};

fn fail(e: &RegistryError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn settings(config: &CliConfig) -> Result<Settings, RegistryError> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            let file_config = RegistryConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    Settings::merge(file_config.as_ref(), config, config.verbose, config.json_logs)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match settings(&config) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(if config.verbose { "debug" } else { "info" });
            fail(&e);
        }
    };

    if settings.json_logs {
        logger::init_json_logger(&settings.log_level);
    } else {
        logger::init_cli_logger(&settings.log_level);
    }

    tracing::info!("Starting parcel-registry CLI");
    tracing::debug!("Settings: {:?}", settings);

    let registry = match load_registry(&settings.parcels_path, settings.format) {
        Ok(registry) => registry,
        Err(e) => fail(&e),
    };

    match run_query(&registry, &config.query) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
