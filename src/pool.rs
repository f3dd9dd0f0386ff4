//! Character pool construction from the four input fields.

use std::collections::HashSet;

use thiserror::Error;

/// Minimum number of unique characters required to build a pool.
pub const MIN_UNIQUE: usize = 10;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*";

/// The four raw character fields, in their fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolInput {
    pub uppercase: String,
    pub lowercase: String,
    pub numbers: String,
    pub symbols: String,
}

impl Default for PoolInput {
    fn default() -> Self {
        Self {
            uppercase: UPPERCASE.to_string(),
            lowercase: LOWERCASE.to_string(),
            numbers: DIGITS.to_string(),
            symbols: SYMBOLS.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("need at least {min} unique characters, got {actual}", min = MIN_UNIQUE)]
    TooFewUnique { actual: usize },
}

/// Build the unique character pool from the four fields.
///
/// Concatenates in field order (uppercase, lowercase, numbers, symbols) and
/// drops duplicates, keeping the first occurrence of each character. Fails
/// when fewer than [`MIN_UNIQUE`] distinct characters remain.
pub fn build(input: &PoolInput) -> Result<Vec<char>, PoolError> {
    let combined = [
        input.uppercase.as_str(),
        input.lowercase.as_str(),
        input.numbers.as_str(),
        input.symbols.as_str(),
    ]
    .concat();

    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for c in combined.chars() {
        if seen.insert(c) {
            pool.push(c);
        }
    }

    if pool.len() < MIN_UNIQUE {
        return Err(PoolError::TooFewUnique { actual: pool.len() });
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(upper: &str, lower: &str, numbers: &str, symbols: &str) -> PoolInput {
        PoolInput {
            uppercase: upper.to_string(),
            lowercase: lower.to_string(),
            numbers: numbers.to_string(),
            symbols: symbols.to_string(),
        }
    }

    #[test]
    fn test_exactly_ten_unique_succeeds() {
        let pool = build(&input("ABC", "abc", "123", "!")).unwrap();
        assert_eq!(pool.len(), 10);
        assert_eq!(pool, vec!['A', 'B', 'C', 'a', 'b', 'c', '1', '2', '3', '!']);
    }

    #[test]
    fn test_too_few_unique_reports_count() {
        let err = build(&input("AB", "", "", "")).unwrap_err();
        assert_eq!(err, PoolError::TooFewUnique { actual: 2 });
    }

    #[test]
    fn test_duplicates_across_fields_collapse() {
        // 'A' repeated and 'b' repeated leave only two distinct chars
        let err = build(&input("AAA", "bbbbbbbbbb", "", "")).unwrap_err();
        assert_eq!(err, PoolError::TooFewUnique { actual: 2 });
    }

    #[test]
    fn test_first_occurrence_order_preserved() {
        let pool = build(&input("CBA", "abc", "321", "!@")).unwrap();
        assert_eq!(
            pool,
            vec!['C', 'B', 'A', 'a', 'b', 'c', '3', '2', '1', '!', '@']
        );
    }

    #[test]
    fn test_overlap_keeps_earlier_field_position() {
        // '1' appears in both numbers and symbols; the numbers slot wins
        let pool = build(&input("ABCDE", "fghij", "12", "1!")).unwrap();
        assert_eq!(pool.iter().filter(|&&c| c == '1').count(), 1);
        let one = pool.iter().position(|&c| c == '1').unwrap();
        let two = pool.iter().position(|&c| c == '2').unwrap();
        assert_eq!(two, one + 1);
    }

    #[test]
    fn test_no_duplicates_in_result() {
        let pool = build(&PoolInput::default()).unwrap();
        let distinct: HashSet<char> = pool.iter().copied().collect();
        assert_eq!(distinct.len(), pool.len());
        assert_eq!(pool.len(), 26 + 26 + 10 + 8);
    }

    #[test]
    fn test_error_message_includes_count() {
        let err = build(&input("AB", "", "", "")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "need at least 10 unique characters, got 2"
        );
    }
}
