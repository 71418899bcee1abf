//! Terminal output utilities.
//!
//! Box drawing, slider rendering, notices, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

// ============================================================================
// Notices
// ============================================================================

/// Outcome message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Notice::Success(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Notice::Error(msg.into())
    }

    pub fn render(&self) -> String {
        match self {
            Notice::Success(msg) => format!("{GREEN}\u{2714} {msg}{RESET}"),
            Notice::Error(msg) => format!("{RED}\u{2716} {msg}{RESET}"),
        }
    }
}

/// Print a notice centered under the box.
pub fn print_notice(notice: &Notice) {
    print_centered(&notice.render());
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (54 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 54;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a key binding with its description.
pub fn box_opt(key: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let key_col = 16;
    let line = format!("{:<key_col$}{}", key, desc);
    let padding = inner_width.saturating_sub(line.chars().count());
    println!("│ {}{} │", line, " ".repeat(padding));
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Print centered text within box width.
pub fn print_centered(text: &str) {
    let width = console_width(text);
    let padding = BOX_WIDTH.saturating_sub(width) / 2;
    println!("{}{}", " ".repeat(padding), text);
    flush();
}

// ============================================================================
// Slider
// ============================================================================

/// Render a horizontal slider track: `4 ━━━━━━●───────── 32`.
pub fn slider(value: usize, min: usize, max: usize, track: usize) -> String {
    let track = track.max(2);
    let span = max.saturating_sub(min).max(1);
    let offset = value.clamp(min, max) - min;
    let knob = offset * (track - 1) / span;

    let mut bar = String::with_capacity(track * 3);
    for i in 0..track {
        bar.push(if i < knob {
            '━'
        } else if i == knob {
            '●'
        } else {
            '─'
        });
    }
    format!("{min:>2} {bar} {max}")
}
