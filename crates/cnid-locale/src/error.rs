//! Locale lookup and table loading errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The tag does not name a locale this crate ships tables for.
    #[error("unsupported locale tag {tag:?} (supported: zh-cn, en-us)")]
    Unsupported { tag: String },

    /// A table from an external source failed shape validation.
    #[error("malformed locale table: {message}")]
    MalformedTable { message: String },
}
