use catalog_etl::core::ConfigProvider;
use catalog_etl::utils::{logger, validation::Validate};
use catalog_etl::{CliConfig, EtlEngine, LocalStorage, ScrapePipeline, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting catalog-etl CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor_enabled = cli.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let outcome = match cli.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(config) => {
                let monitor = monitor_enabled || config.monitoring_enabled();
                validate_or_exit(&config);
                run_pipeline(config, monitor).await
            }
            Err(e) => {
                tracing::error!("❌ Could not load configuration file '{}': {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        None => {
            validate_or_exit(&cli);
            run_pipeline(cli, monitor_enabled).await
        }
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Scrape completed successfully!");
            tracing::info!("📁 Workbook saved to: {}", output_path);
            println!("✅ Scrape completed successfully!");
            println!("📁 Workbook saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                catalog_etl::utils::error::ErrorSeverity::Low => 0,
                catalog_etl::utils::error::ErrorSeverity::Medium => 2,
                catalog_etl::utils::error::ErrorSeverity::High => 1,
                catalog_etl::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn validate_or_exit<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn run_pipeline<C: ConfigProvider>(
    config: C,
    monitor_enabled: bool,
) -> catalog_etl::Result<String> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ScrapePipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}
