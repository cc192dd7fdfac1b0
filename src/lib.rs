// src/lib.rs
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod generator;
pub mod models;
pub mod state;
pub mod strength;

pub use config::Config;
pub use models::{PasswordOptions, Strength};
pub use state::PasswordGenerator;
