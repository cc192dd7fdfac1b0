// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Shell command the password is piped into when copying
    #[arg(long, env = "PASSGEN_COPY_COMMAND")]
    pub copy_command: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
