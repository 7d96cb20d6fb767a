//! Compiled-in label data.

mod en_us;
mod zh_cn;

pub(crate) use en_us::EN_US;
pub(crate) use zh_cn::ZH_CN;

/// Static label data for one locale.
pub(crate) struct LocaleData {
    /// `(six-digit code, name)` pairs with unique keys.
    pub regions: &'static [(&'static str, &'static str)],
    /// Male then female.
    pub gender: [&'static str; 2],
    /// 1901-anchored order.
    pub zodiac: [&'static str; 12],
    /// Cutoff-month order, Aquarius first.
    pub constellations: [&'static str; 12],
}
