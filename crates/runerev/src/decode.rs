use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{
    error::DecodeError,
    reverse::{reverse_code_points, reverse_runes},
};

/// Reverses the code points of a UTF-8 byte slice, rejecting malformed input.
///
/// On success this is exactly [`reverse_code_points`] applied to the decoded
/// text.
///
/// # Errors
///
/// Returns a [`DecodeError`] locating the first malformed sequence if `input`
/// is not valid UTF-8. Nothing is ever substituted; callers that want
/// best-effort decoding use [`reverse_code_points_lossy`] instead.
///
/// # Examples
///
/// ```rust
/// use runerev::reverse_code_points_bytes;
///
/// assert_eq!(reverse_code_points_bytes(b"abc").unwrap(), "cba");
/// assert!(reverse_code_points_bytes(b"ab\xFF").is_err());
/// ```
pub fn reverse_code_points_bytes(input: &[u8]) -> Result<String, DecodeError> {
    let text = input.to_str().map_err(DecodeError::from)?;
    Ok(reverse_code_points(text))
}

/// Reverses the code points of a byte slice, substituting U+FFFD for any
/// malformed UTF-8 sequence.
///
/// Total over arbitrary bytes. On valid UTF-8 input it agrees with
/// [`reverse_code_points_bytes`].
///
/// # Examples
///
/// ```rust
/// use runerev::reverse_code_points_lossy;
///
/// assert_eq!(reverse_code_points_lossy(b"abc"), "cba");
/// assert_eq!(reverse_code_points_lossy(b"ab\xFF"), "\u{FFFD}ba");
/// ```
#[must_use]
pub fn reverse_code_points_lossy(input: &[u8]) -> String {
    let mut runes: Vec<char> = input.chars().collect();
    reverse_runes(&mut runes);
    runes.into_iter().collect()
}
