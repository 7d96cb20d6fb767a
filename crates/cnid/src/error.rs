//! Card construction errors.

use thiserror::Error;

use cnid_locale::LocaleError;
use cnid_model::FormatError;

/// Why an [`IdentityCard`](crate::IdentityCard) could not be built.
///
/// Number validation runs before locale resolution, so a string that is both
/// malformed and paired with an unknown tag reports the format problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}
