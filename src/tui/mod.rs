//! Interactive terminal form.

mod input;
mod keys;
mod text;

pub use input::*;
pub use keys::*;
pub use text::*;

use crate::clipboard::{ClipboardError, LazyClipboard};
use crate::form::Form;
use crate::pass::{MAX_LENGTH, MIN_LENGTH};
use crate::settings::Settings;
use crate::terminal::{Notice, clear, read_key, reset_terminal};

/// Run the interactive form until the user quits.
pub fn run() {
    reset_terminal();

    let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        Settings::default()
    });

    let mut form = Form::new(&settings);
    let mut source = settings.source.open();
    let mut clipboard = LazyClipboard::default();
    let mut notice: Option<Notice> = None;

    loop {
        clear();
        print_form(&form, settings.source, notice.as_ref());

        let key = match read_key() {
            Ok(key) => key,
            Err(e) => {
                log::error!("failed to read key: {e}");
                break;
            }
        };
        notice = None;

        match map_key(key, form.mode()) {
            Action::Shorter => form.shorter(),
            Action::Longer => form.longer(),
            Action::EnterLength => {
                println!();
                let prompt = format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})");
                if let Some(length) = get_numeric_input(&prompt, form.length()) {
                    form.set_length(length);
                }
            }
            Action::Toggle(class) => form.toggle(class),
            Action::Generate => {
                notice = Some(match form.generate(source.as_mut()) {
                    Ok(_) => Notice::success("Password generated!"),
                    Err(e) => Notice::error(e.to_string()),
                });
            }
            Action::Copy => {
                notice = match form.copy(&mut clipboard) {
                    Ok(()) => Some(Notice::success("Password copied to clipboard!")),
                    Err(ClipboardError::NothingToCopy) => None,
                    Err(e) => Some(Notice::error(e.to_string())),
                };
            }
            Action::Save => {
                form.apply_to(&mut settings);
                notice = Some(match settings.save_to_file() {
                    Ok(()) => Notice::success(format!("Saved to {}", Settings::path().display())),
                    Err(e) => Notice::error(e.to_string()),
                });
            }
            Action::Help => {
                clear();
                print_help();
                let _ = read_key();
            }
            Action::Quit => break,
            Action::None => {}
        }
    }

    clear();
    reset_terminal();
}
