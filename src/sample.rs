//! Random string sampling from a unique character pool.

use rand::Rng;

/// Number of result strings produced per generation.
pub const RESULT_COUNT: usize = 10;
/// Characters per result string (capped at the pool size).
pub const RESULT_LENGTH: usize = 10;

/// In-place Fisher–Yates shuffle.
pub fn shuffle<R: Rng>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
}

/// Generate `count` random strings of `min(length, pool.len())` characters.
///
/// Each string is the prefix of a fresh shuffle of the whole pool, so a
/// character never repeats within one string. Shuffles are independent
/// across strings; whole permutations may repeat between them.
pub fn generate<R: Rng>(pool: &[char], count: usize, length: usize, rng: &mut R) -> Vec<String> {
    let take = length.min(pool.len());
    (0..count)
        .map(|_| {
            let mut chars = pool.to_vec();
            shuffle(&mut chars, rng);
            chars[..take].iter().collect()
        })
        .collect()
}

/// Join results into the copy-all clipboard payload.
pub fn join_all(results: &[String]) -> String {
    results.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn pool() -> Vec<char> {
        "ABCabc123!".chars().collect()
    }

    #[test]
    fn test_generates_exact_count_and_length() {
        let mut rng = SmallRng::seed_from_u64(42);
        let results = generate(&pool(), RESULT_COUNT, RESULT_LENGTH, &mut rng);
        assert_eq!(results.len(), 10);
        for r in &results {
            assert_eq!(r.chars().count(), 10);
        }
    }

    #[test]
    fn test_no_repeats_within_a_string() {
        let mut rng = SmallRng::seed_from_u64(7);
        for r in generate(&pool(), RESULT_COUNT, RESULT_LENGTH, &mut rng) {
            let distinct: HashSet<char> = r.chars().collect();
            assert_eq!(distinct.len(), r.chars().count());
        }
    }

    #[test]
    fn test_strings_drawn_from_pool() {
        let pool: Vec<char> = "ABCDEFGHIJKLMNOP".chars().collect();
        let allowed: HashSet<char> = pool.iter().copied().collect();
        let mut rng = SmallRng::seed_from_u64(99);
        for r in generate(&pool, RESULT_COUNT, RESULT_LENGTH, &mut rng) {
            assert!(r.chars().all(|c| allowed.contains(&c)));
        }
    }

    #[test]
    fn test_ten_char_pool_yields_permutations() {
        let pool = pool();
        let sorted: Vec<char> = {
            let mut s = pool.clone();
            s.sort_unstable();
            s
        };
        let mut rng = SmallRng::seed_from_u64(3);
        for r in generate(&pool, RESULT_COUNT, RESULT_LENGTH, &mut rng) {
            let mut chars: Vec<char> = r.chars().collect();
            chars.sort_unstable();
            assert_eq!(chars, sorted);
        }
    }

    #[test]
    fn test_length_caps_at_pool_size() {
        let pool: Vec<char> = "ABCDEF".chars().collect();
        let mut rng = SmallRng::seed_from_u64(1);
        let results = generate(&pool, 3, RESULT_LENGTH, &mut rng);
        assert_eq!(results.len(), 3);
        for r in &results {
            assert_eq!(r.chars().count(), 6);
        }
    }

    #[test]
    fn test_shuffle_preserves_characters() {
        let mut chars = pool();
        let mut expected = chars.clone();
        expected.sort_unstable();
        let mut rng = SmallRng::seed_from_u64(5);
        shuffle(&mut chars, &mut rng);
        chars.sort_unstable();
        assert_eq!(chars, expected);
    }

    #[test]
    fn test_same_seed_same_output() {
        let pool = pool();
        let mut a = SmallRng::seed_from_u64(1234);
        let mut b = SmallRng::seed_from_u64(1234);
        assert_eq!(
            generate(&pool, RESULT_COUNT, RESULT_LENGTH, &mut a),
            generate(&pool, RESULT_COUNT, RESULT_LENGTH, &mut b)
        );
    }

    #[test]
    fn test_join_all_uses_newlines() {
        let results = vec!["abc".to_string(), "def".to_string(), "ghi".to_string()];
        assert_eq!(join_all(&results), "abc\ndef\nghi");
    }
}
