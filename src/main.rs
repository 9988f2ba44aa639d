use anyhow::Context;
use clap::Parser;
use ladys_essence::domain::ports::{Clock, FixedClock, SystemClock};
use ladys_essence::domain::model::UserId;
use ladys_essence::utils::error::ErrorSeverity;
use ladys_essence::utils::{logger, validation::Validate};
use ladys_essence::{CliConfig, CsvCycleStore, CyclePredictor, EssenceError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let toml_config = match &config.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    if toml_config.log_format() == "json" {
        logger::init_json_logger(config.verbose, toml_config.log_level());
    } else {
        logger::init_cli_logger(config.verbose, toml_config.log_level());
    }

    tracing::info!("Starting ladys-essence for user {}", config.user);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate().and_then(|_| toml_config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config, &toml_config).await {
        Ok(screen) => {
            println!("{}", screen);
        }
        Err(e) => {
            tracing::error!(
                "Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(config: &CliConfig, toml_config: &TomlConfig) -> Result<String, EssenceError> {
    let store = CsvCycleStore::from_paths(config.cycles.as_str(), config.profiles.as_deref())?;
    let user = UserId::new(config.user.trim());

    if config.stats {
        return Ok(store.stats(&user).render());
    }

    let today = config
        .today_override()?
        .unwrap_or_else(|| SystemClock.today());
    let predictor = CyclePredictor::new(store, FixedClock(today), toml_config.settings());

    if config.json {
        let report = predictor.report(&user, config.month_offset).await?;
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    if config.current {
        return predictor.current_cycle_info(&user).await;
    }

    match &config.keys {
        Some(keys) => predictor.respond(&user, keys).await,
        None => predictor.predict(&user, config.month_offset).await,
    }
}
