// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and print it
    Generate {
        /// Password length
        #[arg(long, short, default_value_t = 12)]
        length: usize,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude numbers
        #[arg(long)]
        no_numbers: bool,

        /// Include symbols
        #[arg(long)]
        symbols: bool,

        /// Copy the generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rate the strength of a password
    Analyze {
        /// Password to rate
        #[arg(required = true)]
        password: String,
    },
}
