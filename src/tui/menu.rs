//! Interactive form loop and results panel.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::clipboard;
use crate::pool::{self, PoolInput};
use crate::sample::{RESULT_COUNT, RESULT_LENGTH, generate, join_all};
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::input::get_editable_input;
use super::text::{Notice, copy_prompt, enter_prompt, print_form, print_help, print_results};

pub fn form_menu() {
    reset_terminal();
    clear();

    let mut fields = Settings::load_from_file()
        .map(|s| s.fields)
        .unwrap_or_default();
    let mut rng = SmallRng::from_entropy();
    let mut notice: Option<Notice> = None;

    loop {
        print_form(&fields, notice.take().as_ref());

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => match pool::build(&fields) {
                Ok(pool) => {
                    results_panel(&pool, &mut rng);
                    clear();
                }
                Err(e) => {
                    clear();
                    notice = Some(Notice::Error(e.to_string()));
                }
            },
            "1" => {
                edit_field(&mut fields.uppercase, "Uppercase characters");
                clear();
            }
            "2" => {
                edit_field(&mut fields.lowercase, "Lowercase characters");
                clear();
            }
            "3" => {
                edit_field(&mut fields.numbers, "Number characters");
                clear();
            }
            "4" => {
                edit_field(&mut fields.symbols, "Symbol characters");
                clear();
            }
            "s" => {
                clear();
                notice = Some(save_fields(&fields));
            }
            "f" => {
                clear();
                match Settings::load_from_file() {
                    Ok(s) => {
                        fields = s.fields;
                        notice = Some(Notice::Info("Loaded saved fields".to_string()));
                    }
                    Err(e) => {
                        notice = Some(Notice::Error(format!("Error loading fields: {}", e)));
                    }
                }
            }
            "r" => {
                clear();
                fields = PoolInput::default();
            }
            "h" => {
                clear();
                print_help();
            }
            "q" => {
                clear();
                break;
            }
            _ => {
                clear();
                notice = Some(Notice::Error("Invalid option".to_string()));
            }
        }
    }
}

fn edit_field(field: &mut String, prompt: &str) {
    // Esc keeps the current value
    if let Some(new_value) = get_editable_input(prompt, field) {
        *field = new_value;
    }
}

fn save_fields(fields: &PoolInput) -> Notice {
    let settings = Settings {
        fields: fields.clone(),
    };
    match settings.save_to_file() {
        Ok(()) => Notice::Info("Fields saved".to_string()),
        Err(e) => Notice::Error(format!("Error saving fields: {}", e)),
    }
}

fn results_panel(pool: &[char], rng: &mut SmallRng) {
    let mut results = generate(pool, RESULT_COUNT, RESULT_LENGTH, rng);
    let mut notice: Option<Notice> = None;

    loop {
        clear();
        // Each render fully replaces the previous panel
        print_results(pool.len(), &results, notice.take().as_ref());

        let input = match get_editable_input(copy_prompt(), "") {
            Some(s) => s,
            None => break, // Esc: back to the form
        };

        match input.trim() {
            "" => results = generate(pool, RESULT_COUNT, RESULT_LENGTH, rng),
            "a" => notice = Some(copy_notice(&join_all(&results))),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=results.len()).contains(&n) => {
                    notice = Some(copy_notice(&results[n - 1]));
                }
                _ => notice = Some(Notice::Error("Invalid option".to_string())),
            },
        }
    }
}

/// Copy to clipboard and report the outcome without aborting the panel.
fn copy_notice(text: &str) -> Notice {
    match clipboard::copy(text) {
        Ok(()) => Notice::Info("Copied to clipboard".to_string()),
        Err(e) => Notice::Error(format!("Clipboard error: {}", e)),
    }
}
