//! Key bindings for the interactive form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pass::CharacterClass;
use crate::settings::FormMode;

/// Toggle keys in display order.
pub const TOGGLES: [(char, CharacterClass); 3] = [
    ('1', CharacterClass::Digits),
    ('2', CharacterClass::Letters),
    ('3', CharacterClass::Special),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Shorter,
    Longer,
    EnterLength,
    Toggle(CharacterClass),
    Generate,
    Copy,
    Save,
    Help,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, mode: FormMode) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('-') => Action::Shorter,
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Action::Longer,
        KeyCode::Char('l') => Action::EnterLength,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(c) if mode == FormMode::Classes => TOGGLES
            .iter()
            .find(|(key, _)| *key == c)
            .map_or(Action::None, |(_, class)| Action::Toggle(*class)),
        _ => Action::None,
    }
}
