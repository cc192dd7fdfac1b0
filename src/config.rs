// src/config.rs
use std::env;
use std::time::Duration;
use log::LevelFilter;

use crate::clipboard::DEFAULT_COPY_COMMAND;

// Runtime configuration for the generator
#[derive(Debug, Clone)]
pub struct Config {
    // Shell command the password is piped into when copying
    pub copy_command: String,

    // How long the copied acknowledgment stays set
    pub copied_reset_delay: Duration,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_command: DEFAULT_COPY_COMMAND.to_string(),
            copied_reset_delay: Duration::from_millis(2000),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(command) = env::var("PASSGEN_COPY_COMMAND") {
            if !command.trim().is_empty() {
                config.copy_command = command;
            }
        }

        if let Ok(val) = env::var("PASSGEN_COPIED_RESET_MS") {
            if let Ok(millis) = val.parse::<u64>() {
                config.copied_reset_delay = Duration::from_millis(millis);
            } else {
                log::warn!("Invalid PASSGEN_COPIED_RESET_MS value '{}', using default", val);
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.copy_command, DEFAULT_COPY_COMMAND);
        assert_eq!(config.copied_reset_delay, Duration::from_millis(2000));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
