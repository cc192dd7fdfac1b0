// src/cli/menu.rs
use inquire::{Confirm, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use console::style;

use crate::models::{PasswordOptions, Strength};
use crate::state::PasswordGenerator;

pub async fn run_menu(
    generator: Arc<PasswordGenerator>,
    should_exit: Arc<AtomicBool>,
) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSGEN WIDGET           ║");
    println!("╚══════════════════════════════════════╝");

    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let options = vec![
            "🔐  Generate password",
            "📋  Copy to clipboard",
            "⚙️  Edit options",
            "🔁  Reset to defaults",
            "❌  Exit",
        ];

        // Use a blocking task so Ctrl+C can still flip the exit flag
        let selection_result = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .prompt_skippable()
        })
        .await?;

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(selection)) => match selection {
                "🔐  Generate password" => {
                    generator.generate();

                    match generator.error() {
                        Some(error) => println!("❌ {}", error),
                        None => print_password(&generator),
                    }
                }
                "📋  Copy to clipboard" => {
                    if generator.generated_password().is_empty() {
                        println!("❗ Nothing generated yet.");
                        continue;
                    }

                    generator.copy().await;

                    if generator.copied() {
                        println!("✅ Copied to clipboard");
                    } else {
                        println!("⚠️ Could not copy to clipboard. Is the copy command available?");
                    }
                }
                "⚙️  Edit options" => {
                    let current = generator.options();

                    let length: usize = Text::new("Password length:")
                        .with_default(&current.length.to_string())
                        .prompt()
                        .and_then(|s| {
                            s.parse()
                                .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                        })?;

                    let include_uppercase = Confirm::new("Include uppercase letters?")
                        .with_default(current.include_uppercase)
                        .prompt()?;

                    let include_lowercase = Confirm::new("Include lowercase letters?")
                        .with_default(current.include_lowercase)
                        .prompt()?;

                    let include_numbers = Confirm::new("Include numbers?")
                        .with_default(current.include_numbers)
                        .prompt()?;

                    let include_symbols = Confirm::new("Include symbols?")
                        .with_default(current.include_symbols)
                        .prompt()?;

                    generator.set_options(PasswordOptions {
                        length,
                        include_uppercase,
                        include_lowercase,
                        include_numbers,
                        include_symbols,
                    });

                    println!("✅ Options updated");
                }
                "🔁  Reset to defaults" => {
                    generator.reset();
                    println!("✅ Options and state reset to defaults");
                }
                "❌  Exit" => {
                    println!("👋 Goodbye!");
                    should_exit.store(true, Ordering::SeqCst);
                    exit_requested = true;
                }
                _ => {}
            },
            Ok(None) => {
                if should_exit.load(Ordering::SeqCst) {
                    break;
                }
                // Sleep briefly to avoid consuming CPU while waiting for input
                thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

fn print_password(generator: &PasswordGenerator) {
    let password = generator.generated_password();
    let rating = generator.strength();

    let styled = match rating {
        Strength::Weak => style(rating.to_string()).red(),
        Strength::Medium => style(rating.to_string()).yellow(),
        Strength::Strong => style(rating.to_string()).green(),
    };

    println!("\n🔐 Generated password: {}", password);
    println!("Strength: {}\n", styled);
}
