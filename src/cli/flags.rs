use clap::Parser;

use crate::pass::{MAX_LENGTH, MIN_LENGTH};

/// Generate random passwords from selectable character classes.
///
/// Run without arguments to open the interactive form.
#[derive(Debug, Default, Parser)]
#[command(name = "passgen", version)]
pub struct CliFlags {
    /// Password length (4-32)
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Leave out letters
    #[arg(long)]
    pub no_letters: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Always use the full alphabet, ignoring class options
    #[arg(long)]
    pub fixed: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Draw every character from the OS random source
    #[arg(long)]
    pub os_rng: bool,

    /// Start from the saved settings
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting settings for the interactive form
    #[arg(long)]
    pub save: bool,

    /// Suppress warnings and prompts
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let len: usize = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if (MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        Ok(len)
    } else {
        Err(format!("length must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}
