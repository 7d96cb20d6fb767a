pub mod card;
pub mod error;
pub mod profile;

pub use card::IdentityCard;
pub use error::CardError;
pub use profile::Profile;

pub use cnid_locale::{EmbeddedTables, Locale, LocaleError, LocaleProvider, LocaleTable, TableData};
pub use cnid_model::{
    CONSTELLATION_EDGE_DAYS, Constellation, FormatError, Gender, IdentityCardNumber, Zodiac,
    check_character,
};
