use rstest::rstest;

use crate::reverse_code_points;

#[rstest]
#[case("", "")]
#[case("x", "x")]
#[case("ab", "ba")]
#[case("Hello, world", "dlrow ,olleH")]
#[case("Hello, 世界", "界世 ,olleH")]
// 3-byte code point flanked by 1-byte code points must move whole.
#[case("a界c", "c界a")]
#[case("abcde", "edcba")]
#[case("racecar", "racecar")]
#[case("🦀x", "x🦀")]
fn reverses_by_code_point(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(reverse_code_points(input), expected);
}

#[test]
fn odd_length_keeps_midpoint_in_place() {
    let reversed = reverse_code_points("ab界de");
    assert_eq!(reversed, "ed界ba");
    assert_eq!(reversed.chars().nth(2), Some('界'));
}
