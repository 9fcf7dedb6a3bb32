use alloc::{string::String, vec::Vec};

/// Returns a new string whose code points are those of `input` in reverse
/// order.
///
/// The input is decoded into a sequence of Unicode scalar values before
/// reversing, so multi-byte characters keep their encoding and only their
/// position changes. The input itself is never modified.
///
/// # Examples
///
/// ```rust
/// use runerev::reverse_code_points;
///
/// assert_eq!(reverse_code_points("Hello, world"), "dlrow ,olleH");
/// assert_eq!(reverse_code_points("Hello, 世界"), "界世 ,olleH");
/// assert_eq!(reverse_code_points(""), "");
/// ```
#[must_use]
pub fn reverse_code_points(input: &str) -> String {
    let mut runes: Vec<char> = input.chars().collect();
    reverse_runes(&mut runes);
    runes.into_iter().collect()
}

/// In-place two-pointer reversal. The middle element of an odd-length slice
/// stays put.
pub(crate) fn reverse_runes(runes: &mut [char]) {
    if runes.is_empty() {
        return;
    }
    let mut i = 0;
    let mut j = runes.len() - 1;
    while i < j {
        runes.swap(i, j);
        i += 1;
        j -= 1;
    }
}
