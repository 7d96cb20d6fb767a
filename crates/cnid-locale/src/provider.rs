//! Table providers.

use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::data;
use crate::error::LocaleError;
use crate::locale::Locale;
use crate::table::LocaleTable;

/// Source of locale tables.
///
/// The stock source is [`EmbeddedTables`]. Alternative implementations can
/// load tables from disk or a configuration service; a returned table must
/// stay immutable for as long as callers hold the `Arc`.
pub trait LocaleProvider {
    /// Table for `locale`, sharing a cached instance where possible.
    fn load(&self, locale: Locale) -> Result<Arc<LocaleTable>, LocaleError>;
}

/// Compiled-in tables, materialized once per locale for the process lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTables;

static ZH_CN: LazyLock<Arc<LocaleTable>> = LazyLock::new(|| build(Locale::ZhCn, &data::ZH_CN));
static EN_US: LazyLock<Arc<LocaleTable>> = LazyLock::new(|| build(Locale::EnUs, &data::EN_US));

fn build(locale: Locale, data: &data::LocaleData) -> Arc<LocaleTable> {
    let table = LocaleTable::from_data(data);
    debug!(locale = %locale, regions = table.region_count(), "locale table materialized");
    Arc::new(table)
}

impl LocaleProvider for EmbeddedTables {
    fn load(&self, locale: Locale) -> Result<Arc<LocaleTable>, LocaleError> {
        let table = match locale {
            Locale::ZhCn => LazyLock::force(&ZH_CN),
            Locale::EnUs => LazyLock::force(&EN_US),
        };
        Ok(Arc::clone(table))
    }
}
