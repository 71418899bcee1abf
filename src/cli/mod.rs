//! Non-interactive command line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;

use std::process::ExitCode;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{apply, parse};

/// Run CLI mode with the full argument list.
pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match parse(&args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };

    match Context::new(flags).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
