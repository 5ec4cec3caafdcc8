//! Identity-name normalization
//!
//! Turns a raw user-typed identity string into the canonical lookup key the
//! resolution API expects.

/// Canonicalize a user-typed identity name.
///
/// Strips leading `@` characters, then truncates at the first `.` separator
/// past the start of the name (`"alice.mns"` → `"alice"`, `"@bob.x"` →
/// `"bob"`, `"nodot"` → `"nodot"`). A dot at position 0 is not a separator.
/// The result is a fixpoint: canonicalizing twice yields the same string as
/// canonicalizing once.
pub fn canonicalize(raw: &str) -> &str {
    let name = raw.trim_start_matches('@');
    match name.find('.') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_dot_suffix() {
        assert_eq!(canonicalize("alice.mns"), "alice");
    }

    #[test]
    fn test_strips_at_prefix_and_suffix() {
        assert_eq!(canonicalize("@bob.x"), "bob");
    }

    #[test]
    fn test_no_suffix_unchanged() {
        assert_eq!(canonicalize("nosuffix"), "nosuffix");
    }

    #[test]
    fn test_at_only_stripped() {
        assert_eq!(canonicalize("@onlyat"), "onlyat");
    }

    #[test]
    fn test_leading_dot_is_not_a_separator() {
        assert_eq!(canonicalize(".leadingdot"), ".leadingdot");
    }

    #[test]
    fn test_multi_label_name() {
        assert_eq!(canonicalize("alice.super.mns"), "alice");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "alice.mns",
            "@bob.x",
            "nosuffix",
            "@onlyat",
            ".leadingdot",
            "alice.super.mns",
            "@@double.at",
            "@.mns",
            "",
            "@",
            ".",
            "a.",
        ];
        for s in samples {
            assert_eq!(
                canonicalize(canonicalize(s)),
                canonicalize(s),
                "canonicalize is not idempotent for {s:?}"
            );
        }
    }
}
