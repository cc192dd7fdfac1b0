// src/main.rs
use clap::Parser;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::config::Config;
use rust_passgen::models::PasswordOptions;
use rust_passgen::state::PasswordGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(command) = &args.copy_command {
        config.copy_command = command.clone();
    }

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::debug!("Loaded config: {:?}", config);

    let generator = Arc::new(PasswordGenerator::with_config(&config));

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
            copy,
        }) => {
            let options = PasswordOptions {
                length,
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_numbers: !no_numbers,
                include_symbols: symbols,
            };

            cli::handlers::handle_generate(&generator, options, copy, args.json)
                .await
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
        Some(CliCommand::Analyze { password }) => {
            cli::handlers::handle_analyze(&password, args.json)
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
        None => {
            let should_exit = Arc::new(AtomicBool::new(false));

            {
                let should_exit = Arc::clone(&should_exit);
                ctrlc::set_handler(move || {
                    log::info!("Ctrl+C received. Shutting down...");
                    should_exit.store(true, Ordering::SeqCst);
                    std::process::exit(0);
                })
                .expect("Failed to set Ctrl+C handler");
            }

            cli::menu::run_menu(Arc::clone(&generator), should_exit)
                .await
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        }
    }

    Ok(())
}
