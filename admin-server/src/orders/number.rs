//! Order number generation
//!
//! Order numbers are "OR-" plus a random numeric suffix. Randomness alone
//! does not guarantee uniqueness, so allocation verifies each candidate
//! against the store and redraws on collision (bounded attempts).

use rand::Rng;

/// Prefix for all generated order numbers
pub const PREFIX: &str = "OR-";

/// Inclusive suffix range (6-7 digits)
const SUFFIX_MIN: u32 = 100_000;
const SUFFIX_MAX: u32 = 9_999_999;

/// Redraws before allocation gives up with a conflict error
pub const MAX_ATTEMPTS: u32 = 5;

/// Draw a candidate order number
pub fn draw() -> String {
    let suffix = rand::thread_rng().gen_range(SUFFIX_MIN..=SUFFIX_MAX);
    format!("{PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix_of(number: &str) -> u32 {
        number
            .strip_prefix(PREFIX)
            .expect("number must start with OR-")
            .parse()
            .expect("suffix must be numeric")
    }

    #[test]
    fn test_draw_format() {
        let number = draw();
        let suffix = suffix_of(&number);
        assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix));
    }

    #[test]
    fn test_draw_stays_in_range() {
        for _ in 0..1000 {
            let suffix = suffix_of(&draw());
            assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix));
        }
    }

    #[test]
    fn test_draw_varies() {
        // 1000 draws over a ~10M space colliding into a single value is
        // effectively impossible
        let first = draw();
        assert!((0..1000).any(|_| draw() != first));
    }
}
