// src/cli/commands.rs
use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the web server
    Serve,

    /// Print a single password and its strength
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length (8-128)
    #[arg(long, short, default_value_t = 16, allow_negative_numbers = true)]
    pub length: i64,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out punctuation
    #[arg(long)]
    pub no_special: bool,

    /// Leave l, 1, I, 0 and O out of generated characters
    #[arg(long)]
    pub avoid_ambiguous: bool,

    /// Words whose characters are mixed into the password
    #[arg(long)]
    pub words: Option<String>,
}
