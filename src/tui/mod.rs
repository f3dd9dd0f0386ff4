//! Interactive TUI: field form and results panel.

mod input;
mod menu;
mod text;

pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    menu::form_menu();
}
