//! Form and help screens.

use crate::entropy::EntropySource;
use crate::form::Form;
use crate::pass::{MAX_LENGTH, MIN_LENGTH, charset, strength};
use crate::settings::FormMode;
use crate::terminal::{
    DIM, Notice, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, print_notice,
    print_rule, slider,
};

use super::keys::TOGGLES;

const PLACEHOLDER: &str = "Generated password will appear here";

pub fn print_form(form: &Form, source: EntropySource, notice: Option<&Notice>) {
    box_top("Password Generator");
    box_line_center("Customize your password and press [Enter]");
    print_rule();

    box_line(&format!("Password Length: {}", form.length()));
    box_line(&slider(form.length(), MIN_LENGTH, MAX_LENGTH, 40));

    if form.mode() == FormMode::Classes {
        box_line("");
        for (key, class) in TOGGLES {
            let mark = if form.classes().contains(class) { "x" } else { " " };
            box_line(&format!("[{mark}] {key}  Include {class}"));
        }
    }
    print_rule();

    match form.password() {
        Some(password) => box_line(&format!("Password: {password}")),
        None => box_line(&format!("Password: {DIM}{PLACEHOLDER}{RESET}")),
    }

    let request = form.request();
    let pool = charset::size(request.enabled);
    let bits = strength::entropy_bits(request.length, pool);
    if pool > 0 {
        box_line(&format!(
            "{DIM}Entropy: {:.1} bits ({}) \u{2022} {} chars{RESET}",
            bits,
            strength::label(bits),
            pool
        ));
    } else {
        box_line(&format!("{DIM}Entropy: no characters selected{RESET}"));
    }
    box_line(&format!("{DIM}Source: {}{RESET}", source.describe()));
    print_rule();

    box_opt("\u{2190}/\u{2192}", "Adjust length");
    box_opt("Enter", "Generate password");
    if form.password().is_some() {
        box_opt("c", "Copy to clipboard");
    }
    box_opt("?", "Help");
    box_opt("Esc", "Quit");
    box_bottom();
    println!();

    if let Some(notice) = notice {
        print_notice(notice);
    }
}

pub fn print_help() {
    box_top("Help");
    box_line("Generates a random password from the selected");
    box_line("character classes, uniformly and with repeats.");
    print_rule();
    box_opt("\u{2190} / -", "Shorter (min 4)");
    box_opt("\u{2192} / +", "Longer (max 32)");
    box_opt("l", "Type a length");
    box_opt("1 / 2 / 3", "Toggle numbers, letters, special");
    box_opt("Enter / g", "Generate password");
    box_opt("c", "Copy password to clipboard");
    box_opt("s", "Save length and options");
    box_opt("Esc / q", "Quit");
    print_rule();
    box_line("CLI: passgen --help");
    box_bottom();
    println!();
    box_line_center("Press any key to return");
}
