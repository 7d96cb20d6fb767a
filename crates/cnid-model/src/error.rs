//! Validation errors for identity card numbers.

use thiserror::Error;

/// Reasons a candidate string is not a well-formed identity card number.
///
/// [`IdentityCardNumber::parse`](crate::IdentityCardNumber::parse) reports the
/// first rule that fails, in the order the rules are checked: length, payload
/// digits, check character, birth date, province code, checksum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The candidate is not exactly 18 characters long.
    #[error("expected 18 characters, found {actual}")]
    InvalidLength { actual: usize },

    /// A payload position (0 through 16) holds something other than an ASCII
    /// digit.
    #[error("expected a digit at position {position}, found {found:?}")]
    InvalidDigit { position: usize, found: char },

    /// The final position holds something other than a digit or `X`.
    #[error("expected a digit or 'X' as the check character, found {found:?}")]
    InvalidCheckChar { found: char },

    /// The birth date field does not name a real calendar date.
    #[error("birth date field {digits:?} is not a calendar date")]
    InvalidBirthDate { digits: String },

    /// The leading two digits are not an assigned province-level code.
    #[error("unknown province code {code:?}")]
    UnknownProvince { code: String },

    /// The check character does not match the weighted checksum of the
    /// payload.
    #[error("checksum mismatch: expected {expected:?}, found {found:?}")]
    ChecksumMismatch { expected: char, found: char },
}
