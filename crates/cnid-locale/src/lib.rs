mod data;
pub mod error;
pub mod locale;
pub mod provider;
pub mod table;

pub use error::LocaleError;
pub use locale::Locale;
pub use provider::{EmbeddedTables, LocaleProvider};
pub use table::{GenderLabels, LocaleTable, TableData};
