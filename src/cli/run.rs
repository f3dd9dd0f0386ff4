//! One-shot CLI generation.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::{parse, prompts, quiet};
use crate::clipboard::{self, ClipboardError};
use crate::pool::{self, PoolInput};
use crate::sample;
use crate::settings::Settings;
use crate::tui::print_help;

/// Run CLI mode: parse flags, build the pool, generate, print or copy.
pub fn run(args: &[String]) {
    let flags = match parse(args) {
        Ok(f) => f,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(2);
        }
    };

    if flags.help {
        print_help();
        return;
    }
    if flags.version {
        println!("randchars {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    quiet::set(flags.quiet);

    let mut input = if flags.saved && !flags.default {
        Settings::load_from_file()
            .map(|s| s.fields)
            .unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load saved fields: {}", e));
                PoolInput::default()
            })
    } else {
        PoolInput::default()
    };

    if let Some(chars) = flags.uppercase {
        input.uppercase = chars;
    }
    if let Some(chars) = flags.lowercase {
        input.lowercase = chars;
    }
    if let Some(chars) = flags.numbers {
        input.numbers = chars;
    }
    if let Some(chars) = flags.symbols {
        input.symbols = chars;
    }

    let pool = match pool::build(&input) {
        Ok(p) => p,
        Err(e) => {
            prompts::error(&e.to_string());
            std::process::exit(1);
        }
    };

    let mut rng = SmallRng::from_entropy();
    let results = sample::generate(&pool, sample::RESULT_COUNT, sample::RESULT_LENGTH, &mut rng);

    if flags.clipboard {
        match clipboard::copy(&sample::join_all(&results)) {
            Ok(()) => {
                prompts::clipboard_copied();
                return;
            }
            Err(ClipboardError::Unavailable(e)) => {
                prompts::clipboard_error(&e);
                if !prompts::clipboard_fallback_prompt() {
                    std::process::exit(1);
                }
                // fall through to terminal output
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                return;
            }
        }
    }

    for result in &results {
        println!("{result}");
    }
}
