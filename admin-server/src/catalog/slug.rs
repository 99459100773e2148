//! Slug derivation for catalog entities
//!
//! A slug is derived from the human-entered name exactly once, at creation.
//! Edits never regenerate it: the stored slug survives name changes, and
//! update payloads carry no slug field at all.

/// Derive a URL-safe slug from a name.
///
/// Lower-cases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims separators from both ends. Returns an empty string
/// when the name has no alphanumeric characters; callers must reject that.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_name() {
        assert_eq!(slugify("Nike Air Max"), "nike-air-max");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(slugify("  Multiple   Spaces "), "multiple-spaces");
    }

    #[test]
    fn test_collapses_punctuation_runs() {
        assert_eq!(slugify("Tom & Jerry's"), "tom-jerry-s");
        assert_eq!(slugify("A--B__C"), "a-b-c");
    }

    #[test]
    fn test_trims_separators() {
        assert_eq!(slugify("!!Sale!!"), "sale");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify("Air Max 90"), "air-max-90");
    }

    #[test]
    fn test_already_slugged_is_stable() {
        assert_eq!(slugify("nike-air-max"), "nike-air-max");
    }

    #[test]
    fn test_empty_and_symbol_only_names() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("???"), "");
    }
}
