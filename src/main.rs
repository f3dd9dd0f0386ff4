use std::env;

mod cli;
mod clipboard;
mod exits;
mod pool;
mod sample;
mod settings;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    }
}
