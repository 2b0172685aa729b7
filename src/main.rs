use clap::Parser;
use oar_export::core::ConfigProvider;
use oar_export::utils::{logger, validation::Validate};
use oar_export::{CliConfig, EtlEngine, ExportPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting oar-export");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            let config = TomlConfig::from_file(&path)?;
            run(config).await
        }
        None => run(cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ExportPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Export complete: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("❌ Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
