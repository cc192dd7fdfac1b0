// src/state.rs
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::generator;
use crate::models::{PasswordOptions, Strength};
use crate::strength;

#[derive(Debug, Default)]
struct State {
    options: PasswordOptions,
    generated_password: String,
    copied: bool,
    error: Option<String>,
}

// The password generator state object. Options are readable and writable;
// the generated password, copied acknowledgment and error message are only
// mutated through the generate/copy/reset actions. The state lives behind
// an Arc so the acknowledgment timer task can clear the copied flag after
// the configured delay.
pub struct PasswordGenerator {
    state: Arc<Mutex<State>>,
    clipboard: ClipboardWriter,
    copied_reset_delay: Duration,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
            clipboard: ClipboardWriter::new(&config.copy_command),
            copied_reset_delay: config.copied_reset_delay,
        }
    }

    pub fn options(&self) -> PasswordOptions {
        self.state.lock().unwrap().options.clone()
    }

    pub fn set_options(&self, options: PasswordOptions) {
        self.state.lock().unwrap().options = options;
    }

    pub fn generated_password(&self) -> String {
        self.state.lock().unwrap().generated_password.clone()
    }

    pub fn copied(&self) -> bool {
        self.state.lock().unwrap().copied
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    // Derived rating of the current generated password, recomputed on read
    pub fn strength(&self) -> Strength {
        strength::classify(&self.state.lock().unwrap().generated_password)
    }

    // Generate a new password from the current options. On failure the
    // previous password is left untouched and the error message is set.
    pub fn generate(&self) {
        let mut state = self.state.lock().unwrap();
        state.error = None;

        match generator::generate(&state.options) {
            Ok(password) => {
                log::debug!("Generated a {}-character password", password.len());
                state.generated_password = password;
                state.copied = false;
            }
            Err(e) => {
                log::warn!("Password generation failed: {}", e);
                state.error = Some(e.to_string());
            }
        }
    }

    // Copy the generated password to the clipboard. A no-op when nothing
    // has been generated. On success the copied acknowledgment is set and
    // cleared again after the configured delay; clipboard failures are
    // logged and never surface in the error field.
    pub async fn copy(&self) {
        let text = {
            let state = self.state.lock().unwrap();
            state.generated_password.clone()
        };

        if text.is_empty() {
            return;
        }

        match self.clipboard.write(&text).await {
            Ok(()) => {
                self.state.lock().unwrap().copied = true;

                let state = Arc::clone(&self.state);
                let delay = self.copied_reset_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    state.lock().unwrap().copied = false;
                });
            }
            Err(e) => {
                log::warn!("Failed to copy to clipboard: {}", e);
            }
        }
    }

    // Restore the default options and clear all transient state
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        state.options = PasswordOptions::default();
        state.generated_password.clear();
        state.copied = false;
        state.error = None;
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn generator_with_copy_command(command: &str) -> PasswordGenerator {
        PasswordGenerator::with_config(&Config {
            copy_command: command.to_string(),
            copied_reset_delay: Duration::from_millis(50),
            ..Config::default()
        })
    }

    #[test]
    fn test_generate_replaces_password_and_clears_copied() {
        let generator = PasswordGenerator::new();
        generator.generate();

        let first = generator.generated_password();
        assert_eq!(first.len(), 12);
        assert!(generator.error().is_none());

        generator.generate();
        assert_eq!(generator.generated_password().len(), 12);
        assert!(!generator.copied());
    }

    #[test]
    fn test_generate_with_no_classes_keeps_previous_password() {
        let generator = PasswordGenerator::new();
        generator.generate();
        let previous = generator.generated_password();

        generator.set_options(PasswordOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordOptions::default()
        });
        generator.generate();

        assert_eq!(generator.generated_password(), previous);
        assert_eq!(
            generator.error().as_deref(),
            Some("select at least one character type")
        );
    }

    #[test]
    fn test_successful_generate_clears_stale_error() {
        let generator = PasswordGenerator::new();
        generator.set_options(PasswordOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
            ..PasswordOptions::default()
        });
        generator.generate();
        assert!(generator.error().is_some());

        generator.set_options(PasswordOptions::default());
        generator.generate();
        assert!(generator.error().is_none());
    }

    #[test]
    fn test_strength_tracks_generated_password() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.strength(), Strength::Weak);

        // Lowercase only rates weak no matter the length
        generator.set_options(PasswordOptions {
            length: 20,
            include_uppercase: false,
            include_numbers: false,
            ..PasswordOptions::default()
        });
        generator.generate();
        assert_eq!(generator.strength(), Strength::Weak);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let generator = PasswordGenerator::new();
        generator.set_options(PasswordOptions {
            length: 32,
            include_symbols: true,
            ..PasswordOptions::default()
        });
        generator.generate();

        generator.reset();

        assert_eq!(generator.options(), PasswordOptions::default());
        assert_eq!(generator.generated_password(), "");
        assert!(!generator.copied());
        assert!(generator.error().is_none());
    }

    #[tokio::test]
    async fn test_copy_without_password_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let sink = dir.path().join("clipboard.txt");
        let generator =
            generator_with_copy_command(&format!("cat > {}", sink.display()));

        generator.copy().await;

        assert!(!generator.copied());
        assert!(!sink.exists());
    }

    #[tokio::test]
    async fn test_copy_sets_and_then_clears_acknowledgment() {
        let dir = tempfile::tempdir().unwrap();
        let sink = dir.path().join("clipboard.txt");
        let generator =
            generator_with_copy_command(&format!("cat > {}", sink.display()));

        generator.generate();
        let password = generator.generated_password();
        generator.copy().await;

        assert!(generator.copied());
        assert_eq!(fs::read_to_string(&sink).unwrap(), password);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!generator.copied());
    }

    #[tokio::test]
    async fn test_copy_failure_leaves_acknowledgment_clear() {
        let generator = generator_with_copy_command("false");
        generator.generate();

        generator.copy().await;

        assert!(!generator.copied());
        assert!(generator.error().is_none());
    }
}
