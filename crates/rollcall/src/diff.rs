//! Absentee computation
//!
//! Compares an expected attendee list against an actual one. Matching is
//! exact on the normalized key (trimmed, case-folded); there is no fuzzy
//! matching.

use std::collections::HashSet;

use crate::normalize::normalized_key;

/// Return the expected entries whose normalized form does not appear in
/// the actual list.
///
/// The output is an ordered subsequence of `expected`, keeping each
/// surviving entry's original casing and formatting. Entries that are
/// empty after trimming are excluded outright, so the function is safe on
/// input that did not go through [`crate::normalize`]. Always succeeds;
/// an empty `expected` yields an empty result.
pub fn absentees(expected: &[String], actual: &[String]) -> Vec<String> {
    let present: HashSet<String> = actual.iter().map(|name| normalized_key(name)).collect();

    expected
        .iter()
        .filter(|name| {
            let key = normalized_key(name);
            !key.is_empty() && !present.contains(&key)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(
            absentees(&names(&["Alice", "bob"]), &names(&["ALICE"])),
            names(&["bob"])
        );
    }

    #[test]
    fn test_identity_yields_empty() {
        let expected = names(&["Alice", "张三", "BOB"]);
        assert!(absentees(&expected, &expected).is_empty());
    }

    #[test]
    fn test_empty_expected() {
        assert!(absentees(&[], &names(&["anyone"])).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let expected = names(&["c", "a", "b", "d"]);
        let actual = names(&["a", "d"]);
        assert_eq!(absentees(&expected, &actual), names(&["c", "b"]));
    }

    #[test]
    fn test_blank_expected_entries_excluded() {
        let expected = names(&["Alice", "   ", ""]);
        assert_eq!(absentees(&expected, &[]), names(&["Alice"]));
    }

    #[test]
    fn test_whitespace_padding_still_matches() {
        assert!(absentees(&names(&[" Alice "]), &names(&["alice"])).is_empty());
    }
}
