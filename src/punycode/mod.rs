// Punycode codec (RFC 3492).
//
// Label-level Bootstring transformation between Unicode code points and the
// ASCII digit form used inside `xn--` labels. The codec knows nothing about
// prefixes, dots, or letter case folding; that belongs to `crate::idna`.
//
// # Modules
//
// - `digit`:   Bootstring parameters, digit alphabet, threshold and bias
// - `encoder`: Code points to ASCII digits
// - `decoder`: ASCII digits to code points

pub mod decoder;
pub mod digit;
pub mod encoder;

pub use decoder::{decode, decode_to_string};
pub use digit::{BASE, DAMP, DELIMITER, INITIAL_BIAS, INITIAL_N, SKEW, T_MAX, T_MIN};
pub use encoder::{encode, encode_into, encode_str};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Failure of a single label transformation.
///
/// All arithmetic is carried out in `u32` with checked operations; inputs
/// that would need a wider accumulator fail with [`PunycodeError::Overflow`]
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PunycodeError {
    /// A character outside the base-36 digit alphabet.
    #[error("invalid digit {ch:?} at byte {position}")]
    InvalidDigit { ch: char, position: usize },
    /// `delta`, `i`, `w` or `n` left the `u32` range.
    #[error("arithmetic overflow")]
    Overflow,
    /// The input ended in the middle of a variable-length integer.
    #[error("truncated variable-length integer")]
    UnexpectedEnd,
    /// A decoded value is a surrogate or lies above U+10FFFF.
    #[error("decoded value {0:#X} is not a Unicode scalar value")]
    InvalidCodePoint(u32),
    /// A non-basic code point appears before the last delimiter.
    #[error("non-basic code point {ch:?} in literal prefix")]
    NonBasic { ch: char },
}
