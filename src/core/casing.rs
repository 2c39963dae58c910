//! Shared case-folding utility.
//!
//! All lowercasing in the crate goes through [`lowercase`] so that every
//! consumer applies the same Unicode mapping. The mapping is the standard
//! library's full Unicode lowercase conversion, not the ASCII-only one.

/// Map every cased character of `s` to its lowercase form.
///
/// Uncased characters (digits, punctuation, CJK, ...) pass through unchanged.
/// The mapping is idempotent: applying it twice yields the same string.
pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_mixed_case() {
        assert_eq!(lowercase("Hello World"), "hello world");
    }

    #[test]
    fn non_ascii_casing_honored() {
        assert_eq!(lowercase("CAFÉ"), "café");
        assert_eq!(lowercase("ÄRGER"), "ärger");
    }

    #[test]
    fn uncased_characters_unchanged() {
        assert_eq!(lowercase("1984 — 東京"), "1984 — 東京");
        assert_eq!(lowercase(""), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Hello World", "CAFÉ", "ßß", "İstanbul"] {
            let once = lowercase(s);
            assert_eq!(lowercase(&once), once);
        }
    }
}
