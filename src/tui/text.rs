use crate::pool::PoolInput;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_top, flush, print_error,
    print_ok, print_rule,
};

/// Status line shown under a menu box.
pub enum Notice {
    Info(String),
    Error(String),
}

/// Print a notice (or a blank line to keep the layout stable).
pub fn print_notice(notice: Option<&Notice>) {
    match notice {
        Some(Notice::Info(msg)) => print_ok(msg),
        Some(Notice::Error(msg)) => print_error(msg),
        None => println!(),
    }
}

pub fn enter_prompt() -> &'static str {
    "Enter a field number (or press Enter to generate)"
}

pub fn copy_prompt() -> &'static str {
    "Enter a result number to copy (or press Enter to regenerate)"
}

pub fn print_form(fields: &PoolInput, notice: Option<&Notice>) {
    box_top("Character Fields");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");
    box_line(&format!("  1) Uppercase: {}", fields.uppercase));
    box_line(&format!("  2) Lowercase: {}", fields.lowercase));
    box_line(&format!("  3) Numbers:   {}", fields.numbers));
    box_line(&format!("  4) Symbols:   {}", fields.symbols));
    box_line("");
    print_rule();
    box_line("     r) reset defaults | f) load saved | s) save | h) help | q) quit");
    box_line_center("Press Enter to generate 10 strings");
    box_bottom();

    print_notice(notice);
    flush();
}

pub fn print_results(pool_size: usize, results: &[String], notice: Option<&Notice>) {
    box_top("Results");
    box_line(&format!("Pool: {} unique characters", pool_size));
    box_line("");
    for (i, result) in results.iter().enumerate() {
        box_line(&format!("  {:>2}) {}", i + 1, result));
    }
    box_line("");
    print_rule();
    box_line(&format!(
        "     1-{}) copy one | a) copy all | Enter) regenerate | Esc) back",
        results.len()
    ));
    box_bottom();

    print_notice(notice);
    flush();
}

pub fn print_help() {
    box_top("Randchars");
    box_line_center("Random character-string generator");
    box_line("");
    box_line("Builds a pool from the unique characters of the four fields");
    box_line("(uppercase, lowercase, numbers, symbols) and generates ten");
    box_line("10-character random strings from it. The pool must contain at");
    box_line("least 10 unique characters.");
    box_line("");
    box_line(&format!("{UNDERLINE}Modes{RESET}:"));
    box_line("  1) Interactive: Run without arguments. Opens a menu to edit");
    box_line("     the fields, generate strings, and copy results.");
    box_line("  2) Client: Pass flags directly to print ten strings and exit.");
    box_line("");
    box_line(&format!("{UNDERLINE}Usage{RESET}:"));
    box_line("  randchars [OPTIONS]");
    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(" Fields:");
    box_line("  -U, --uppercase <CHARS>  Override the uppercase field");
    box_line("  -L, --lowercase <CHARS>  Override the lowercase field");
    box_line("  -N, --numbers <CHARS>    Override the numbers field");
    box_line("  -S, --symbols <CHARS>    Override the symbols field");
    box_line("  -s, --saved              Start from saved fields");
    box_line("  -d, --default            Start from default fields");
    box_line("");
    box_line(" Output:");
    box_line("  -b, --board              Copy results to clipboard instead of");
    box_line("                           printing (joined with newlines)");
    box_line("  -q, --quiet              Suppress confirmations and warnings");
    box_line("");
    box_line(" Info:");
    box_line("  -h, --help               Display this help message");
    box_line("  -v, --version            Display version");
    box_line("");
    box_line(&format!("{UNDERLINE}Examples{RESET}:"));
    box_line("  randchars                      Interactive menu");
    box_line("  randchars -d                   Ten strings from the defaults");
    box_line("  randchars -U ABC -L abc -N 123 -S '!'   Minimal 10-char pool");
    box_line("  randchars -d -b                Copy all ten to the clipboard");
    box_line("");
    box_bottom();
    println!();
}
