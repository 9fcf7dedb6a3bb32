//! Code-point-aware string reversal.
//!
//! Reversing a UTF-8 string byte-by-byte corrupts every character encoded in
//! more than one byte. The functions here decode first and reverse the
//! sequence of Unicode scalar values, so each character's encoding survives
//! intact and only the ordering changes.
//!
//! [`reverse_code_points`] is the core operation over `&str`. Callers holding
//! raw bytes choose how malformed input is handled:
//! [`reverse_code_points_bytes`] rejects it with a [`DecodeError`], and
//! [`reverse_code_points_lossy`] substitutes U+FFFD.
//!
//! Reversal is per scalar value, not per grapheme cluster: a combining mark
//! ends up in front of its base character.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod error;
mod reverse;

#[cfg(test)]
mod tests;

pub use decode::{reverse_code_points_bytes, reverse_code_points_lossy};
pub use error::DecodeError;
pub use reverse::reverse_code_points;
