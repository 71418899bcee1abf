use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod entropy;
mod exits;
mod form;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    init_logging();
    exits::reset_terminal();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if exits::is_tty() => {
            tui::run();
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}

/// Log to stderr, filtered by `PASSGEN_LOG` (default `warn`).
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("PASSGEN_LOG", "warn"))
        .format_timestamp(None)
        .init();
}
