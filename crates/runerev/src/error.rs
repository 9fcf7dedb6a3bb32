use thiserror::Error;

/// Returned by [`reverse_code_points_bytes`](crate::reverse_code_points_bytes)
/// when the input is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid UTF-8 at byte offset {valid_up_to}")]
pub struct DecodeError {
    valid_up_to: usize,
    error_len: Option<usize>,
}

impl DecodeError {
    /// Number of leading bytes that decoded successfully; the byte at this
    /// offset starts the rejected sequence.
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Width in bytes of the rejected sequence, or `None` when the input ends
    /// in a truncated sequence.
    #[must_use]
    pub fn error_len(&self) -> Option<usize> {
        self.error_len
    }
}

impl From<bstr::Utf8Error> for DecodeError {
    fn from(err: bstr::Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}
