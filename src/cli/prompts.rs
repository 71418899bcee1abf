//! Warnings, errors, and prompts for CLI output.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{GREEN, RED, RESET};

const YELLOW: &str = "\x1b[33m";

/// Quiet mode: suppresses warnings, confirmations, and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when stdin is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Skip prompts when quiet or when nobody is there to answer.
pub fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Print a warning to stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red). Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirmation on stderr so stdout stays clean for piping.
pub fn clipboard_copied(count: usize) {
    if !quiet() {
        let what = if count == 1 { "Password" } else { "Passwords" };
        eprintln!("{GREEN}{what} copied to clipboard!{RESET}");
    }
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive and quiet runs fall back without asking.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if skip_prompt() {
        return true;
    }

    eprintln!("{YELLOW}{reason}{RESET}");
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}
