//! End-to-end tests for the normalize → diff pipeline

use rollcall::{absentees, normalize};

#[test]
fn test_pasted_lists_to_absentees() {
    let expected = normalize("张三，李四、王五\n赵六, Alice");
    let actual = normalize("李四 王五 alice");

    assert_eq!(absentees(&expected, &actual), vec!["张三", "赵六"]);
}

#[test]
fn test_diff_output_is_subsequence_of_expected() {
    let expected = normalize("a, B, c, D, e, f");
    let actual = normalize("b, e");

    let missing = absentees(&expected, &actual);

    // Every survivor appears in expected, in the same relative order.
    let mut cursor = expected.iter();
    for name in &missing {
        assert!(cursor.any(|e| e == name), "{name} out of order or missing");
    }
    assert_eq!(missing, vec!["a", "c", "D", "f"]);
}

#[test]
fn test_normalize_is_idempotent_through_rejoin() {
    for input in ["", "  ", "张三", "a,b,，c、d e\nf", " ,, 张三, 李四 "] {
        let once = normalize(input);
        assert_eq!(normalize(&once.join("，")), once, "input: {input:?}");
    }
}

#[test]
fn test_everyone_absent_when_actual_empty() {
    let expected = normalize("Alice, Bob");
    assert_eq!(absentees(&expected, &normalize("")), expected);
}

#[test]
fn test_duplicates_in_expected_all_reported() {
    let expected = normalize("Alice, Alice, Bob");
    let actual = normalize("bob");
    assert_eq!(absentees(&expected, &actual), vec!["Alice", "Alice"]);
}
