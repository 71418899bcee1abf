//! CLI context: settings, flags, and the generate-then-output run.

use std::io::{self, Write};

use anyhow::Context as _;
use zeroize::Zeroize;

use super::{CliFlags, apply, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::form::Form;
use crate::pass::{self, GeneratedPassword};
use crate::settings::Settings;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        prompts::set_quiet(flags.quiet);

        let base = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Self {
            settings: apply(&flags, base),
            flags,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.flags.save
            && let Err(e) = self.settings.save_to_file()
        {
            prompts::warn(&format!("Failed to save settings: {e}"));
        }

        let request = Form::new(&self.settings).request();
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut source = self.settings.source.open();
        let passwords = pass::generate_batch(&request, count, source.as_mut())?;

        if self.flags.clipboard {
            match SystemClipboard::new() {
                Ok(mut clipboard) => return copy_all(&mut clipboard, &passwords),
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Ok(());
                    }
                }
            }
        }

        let stdout = io::stdout();
        write_all(&mut stdout.lock(), &passwords).context("failed to write passwords")
    }
}

fn copy_all<C>(clipboard: &mut C, passwords: &[GeneratedPassword]) -> anyhow::Result<()>
where
    C: Clipboard + ?Sized,
{
    let mut joined = passwords
        .iter()
        .map(GeneratedPassword::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    let result = clipboard.copy(&joined);
    joined.zeroize();
    result?;
    prompts::clipboard_copied(passwords.len());
    Ok(())
}

/// One password per line.
fn write_all<W: Write>(out: &mut W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    for password in passwords {
        out.write_all(password.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
