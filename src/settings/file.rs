//! Settings file persistence.
//!
//! Single-line format: the four pool fields joined by commas, with `|` as
//! the escape character so fields may themselves contain commas, pipes, or
//! newlines.

use std::env;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

use super::Settings;

pub fn save(settings: &Settings) -> io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let line = format!(
        "{},{},{},{}\n",
        escape(&settings.fields.uppercase),
        escape(&settings.fields.lowercase),
        escape(&settings.fields.numbers),
        escape(&settings.fields.symbols),
    );

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(line.as_bytes())
}

pub fn load(settings: &mut Settings) -> io::Result<()> {
    let contents = fs::read_to_string(get_path())?;
    let line = contents.lines().next().unwrap_or("");

    let fields = split_fields(line);
    if fields.len() != 4 {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "settings file is malformed",
        ));
    }

    let mut fields = fields.into_iter();
    settings.fields.uppercase = fields.next().unwrap_or_default();
    settings.fields.lowercase = fields.next().unwrap_or_default();
    settings.fields.numbers = fields.next().unwrap_or_default();
    settings.fields.symbols = fields.next().unwrap_or_default();
    Ok(())
}

fn get_path() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("randchars").join("fields")
}

fn escape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '|' => out.push_str("||"),
            ',' => out.push_str("|,"),
            '\n' => out.push_str("|n"),
            _ => out.push(c),
        }
    }
    out
}

fn split_fields(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '|' => match chars.next() {
                Some('n') => current.push('\n'),
                Some(escaped) => current.push(escaped),
                None => {}
            },
            ',' => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_round_trip() {
        let line = format!(
            "{},{},{},{}",
            escape("ABC"),
            escape("abc"),
            escape("123"),
            escape("!@#")
        );
        assert_eq!(split_fields(&line), vec!["ABC", "abc", "123", "!@#"]);
    }

    #[test]
    fn test_delimiter_chars_in_fields_round_trip() {
        let symbols = "!,|@\n,";
        let line = format!(
            "{},{},{},{}",
            escape("A,B"),
            escape("a|b"),
            escape("12"),
            escape(symbols)
        );
        assert_eq!(split_fields(&line), vec!["A,B", "a|b", "12", symbols]);
    }

    #[test]
    fn test_empty_fields_survive() {
        assert_eq!(split_fields(",,,"), vec!["", "", "", ""]);
    }

    #[test]
    fn test_escape_is_reversible_per_char() {
        assert_eq!(escape("|"), "||");
        assert_eq!(escape(","), "|,");
        assert_eq!(escape("\n"), "|n");
    }
}
