//! ArcPanel CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod host;
mod output;

use arcpanel_core::config::AppConfig;
use arcpanel_core::config::logging::LoggingConfig;
use commands::Cli;

// Dialogs and tree mutations all run on one thread; there is nothing to
// parallelize in a panel over an in-memory dataset.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(seed) = cli.seed {
        config.data.seed = seed;
    }

    init_logging(&config.logging);

    if let Err(e) = cli.execute(&config).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing from the logging section, unless `RUST_LOG` says
/// otherwise.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
    }
}
