use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor with cursor movement, prefilled with `initial`.
///
/// Returns `None` when cancelled (Esc or Ctrl+Q). The buffer is held as
/// chars so multi-byte input edits stay within character boundaries.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    let mut buf: Vec<char> = initial.chars().collect();
    let mut cursor = buf.len(); // insertion point, 0 = before first char
    let mut last_len = buf.len();
    let mut cancelled = false;

    // RawModeGuard restores cooked mode even on early return
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    print!("{}: {}", prompt, initial);
    flush();

    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        // Reset terminal BEFORE exit since process::exit doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        buf.clear();
                        cursor = 0;
                    }
                    KeyCode::Enter => break,
                    KeyCode::Backspace => {
                        if cursor > 0 {
                            cursor -= 1;
                            buf.remove(cursor);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor < buf.len() {
                            buf.remove(cursor);
                        }
                    }
                    KeyCode::Left => cursor = cursor.saturating_sub(1),
                    KeyCode::Right => {
                        if cursor < buf.len() {
                            cursor += 1;
                        }
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = buf.len(),
                    KeyCode::Char(c) => {
                        buf.insert(cursor, c);
                        cursor += 1;
                    }
                    _ => {}
                }

                // Redraw the input line
                let line: String = buf.iter().collect();
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, line);
                last_len = buf.len();

                // Move cursor to correct position (1-based column)
                print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
                flush();
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Explicitly drop guard to disable raw mode BEFORE println
    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(buf.into_iter().collect())
    }
}
