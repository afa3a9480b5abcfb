use clap::Parser;
use fchart::utils::{logger, validation::Validate};
use fchart::{batch, ChartEngine, ChartError, ChartPipeline, CliConfig, LocalStorage, Mode};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fchart");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mode = match config.mode() {
        Ok(mode) => mode,
        Err(ChartError::Usage) => {
            // Wrong arity is answered with usage text on stdout, status 0.
            println!("I don't understand your input.");
            println!("It should be either a file, or NAME RA[deg] DEC[deg]");
            return;
        }
        Err(e) => {
            tracing::error!("Invalid invocation: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    let targets = match &mode {
        Mode::Single(target) => vec![target.clone()],
        Mode::Batch(path) => match batch::read_targets(path) {
            Ok(targets) => {
                tracing::info!("Read {} targets from {}", targets.len(), path);
                targets
            }
            Err(e) => {
                tracing::error!("Failed to read batch file '{}': {}", path, e);
                eprintln!("{}", e);
                std::process::exit(e.exit_code());
            }
        },
    };

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ChartPipeline::new(storage, config);
    let engine = ChartEngine::new(pipeline);

    match engine.run(&targets).await {
        Ok(written) => {
            println!("Wrote {} chart(s)", written.len());
        }
        Err(e) => {
            tracing::error!("Chart generation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
