use crossterm::event::{KeyCode, KeyModifiers};

use crate::terminal::{flush, read_key};

/// Read a number with inline editing. Returns `None` on Esc.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = initial_value.to_string();
    let mut last_len = digits.len();

    print!("{}: {}", prompt, digits);
    flush();

    loop {
        let key = match read_key() {
            Ok(key) => key,
            Err(_) => return Some(initial_value),
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                println!();
                return None;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                digits.clear();
            }
            KeyCode::Esc => {
                println!();
                return None;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                digits.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 3 => {
                digits.push(c);
            }
            _ => {}
        }

        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, digits);
        flush();
        last_len = digits.len();
    }

    println!();
    if digits.is_empty() {
        Some(initial_value)
    } else {
        digits.parse().ok()
    }
}
