pub mod enums;
pub mod error;
pub mod number;

pub use enums::{CONSTELLATION_EDGE_DAYS, Constellation, Gender, Zodiac};
pub use error::FormatError;
pub use number::{IdentityCardNumber, check_character};
