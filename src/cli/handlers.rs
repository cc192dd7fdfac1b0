// src/cli/handlers.rs
use std::error::Error;

use serde::Serialize;

use crate::models::PasswordOptions;
use crate::state::PasswordGenerator;
use crate::strength;

#[derive(Serialize)]
struct GenerateOutput<'a> {
    password: &'a str,
    strength: crate::models::Strength,
}

// Handlers for one-shot CLI commands
pub async fn handle_generate(
    generator: &PasswordGenerator,
    options: PasswordOptions,
    copy: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    generator.set_options(options);
    generator.generate();

    if let Some(error) = generator.error() {
        if json {
            println!("{}", serde_json::json!({ "error": error }));
        } else {
            eprintln!("❌ Failed to generate password: {}", error);
        }
        std::process::exit(1);
    }

    let password = generator.generated_password();
    let rating = generator.strength();

    if json {
        let output = GenerateOutput {
            password: &password,
            strength: rating,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", password);
        println!("Strength: {}", rating);
    }

    if copy {
        generator.copy().await;
        if generator.copied() {
            if !json {
                println!("📋 Copied to clipboard");
            }
        } else if !json {
            eprintln!("⚠️ Could not copy to clipboard");
        }
    }

    Ok(())
}

pub fn handle_analyze(password: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let rating = strength::classify(password);

    if json {
        println!("{}", serde_json::json!({ "strength": rating }));
    } else {
        println!("Strength: {}", rating);
    }

    Ok(())
}
