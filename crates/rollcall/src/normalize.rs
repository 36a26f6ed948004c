//! Free-text name-list normalization
//!
//! Attendance lists arrive as pasted text or OCR output with mixed
//! separators: ASCII commas, full-width commas, CJK enumeration marks,
//! spaces, and newlines. Normalization splits on any run of those and
//! yields trimmed, non-empty tokens in order of first appearance.

/// Returns true for characters that separate names in free-form input.
fn is_delimiter(c: char) -> bool {
    c == ',' || c == '，' || c == '、' || c.is_whitespace()
}

/// Split free-form text into an ordered sequence of name tokens.
///
/// Duplicates are preserved; an empty or delimiter-only input yields an
/// empty vector. Leading and trailing delimiters produce no empty tokens.
pub fn normalize(input: &str) -> Vec<String> {
    input
        .split(is_delimiter)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// The key under which two names are considered the same person:
/// trimmed and case-folded.
pub fn normalized_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
    }

    #[test]
    fn test_delimiters_only() {
        assert!(normalize(" ,，、 \n\t ,, ").is_empty());
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(
            normalize("张三, 李四、王五，赵六\n钱七 孙八"),
            vec!["张三", "李四", "王五", "赵六", "钱七", "孙八"]
        );
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(normalize(" ,, 张三, 李四 "), vec!["张三", "李四"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(normalize("Alice, Bob, Alice"), vec!["Alice", "Bob", "Alice"]);
    }

    #[test]
    fn test_original_casing_kept() {
        assert_eq!(normalize("ALICE bob"), vec!["ALICE", "bob"]);
    }

    #[test]
    fn test_idempotent_modulo_delimiter() {
        let input = "  张三，李四、wang wu\nAlice,,bob  ";
        let once = normalize(input);
        let again = normalize(&once.join(","));
        assert_eq!(once, again);
    }

    #[test]
    fn test_normalized_key_folds_case_and_trims() {
        assert_eq!(normalized_key("  Alice "), "alice");
        assert_eq!(normalized_key("张三"), "张三");
    }
}
