// src/generator.rs
use rand::distributions::{Distribution, Uniform};
use thiserror::Error;

use crate::models::PasswordOptions;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("select at least one character type")]
    NoCharactersSelected,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Candidate pool in fixed class order: uppercase, lowercase, numbers, symbols
pub fn build_pool(options: &PasswordOptions) -> Vec<u8> {
    let mut pool = Vec::new();

    if options.include_uppercase {
        pool.extend_from_slice(UPPERCASE.as_bytes());
    }
    if options.include_lowercase {
        pool.extend_from_slice(LOWERCASE.as_bytes());
    }
    if options.include_numbers {
        pool.extend_from_slice(NUMBERS.as_bytes());
    }
    if options.include_symbols {
        pool.extend_from_slice(SYMBOLS.as_bytes());
    }

    pool
}

// Generate a random password from the selected character classes.
// Each position is sampled independently and uniformly, with replacement.
pub fn generate(options: &PasswordOptions) -> Result<String> {
    let pool = build_pool(options);

    if pool.is_empty() {
        return Err(GeneratorError::NoCharactersSelected);
    }

    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..pool.len());
    let password = (0..options.length)
        .map(|_| pool[dist.sample(&mut rng)] as char)
        .collect();

    Ok(password)
}
