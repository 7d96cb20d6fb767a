//! Label tables: region names keyed by GB/T 2260 code, plus gender, zodiac,
//! and constellation names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use cnid_model::{Constellation, Gender, Zodiac};

use crate::data::LocaleData;
use crate::error::LocaleError;

/// Labels for the two genders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderLabels {
    pub male: String,
    pub female: String,
}

impl GenderLabels {
    pub fn label(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Raw table layout accepted from external sources.
///
/// [`LocaleTable`] validates the shape on conversion, so files or services
/// can hand over a `TableData` without upholding any invariants themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Region names keyed by six-digit division code.
    pub regions: BTreeMap<String, String>,
    pub gender: GenderLabels,
    /// Twelve animal names in 1901-anchored order.
    pub zodiac: Vec<String>,
    /// Twelve sign names in cutoff-month order, Aquarius first.
    pub constellations: Vec<String>,
}

/// Validated, read-only labels for one locale.
///
/// The name arrays are indexed by [`Zodiac::index`] and
/// [`Constellation::index`], so a table always carries exactly twelve names
/// for each. Region keys are six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableData")]
pub struct LocaleTable {
    regions: BTreeMap<String, String>,
    gender: GenderLabels,
    zodiac: [String; 12],
    constellations: [String; 12],
}

impl LocaleTable {
    /// Validate raw table data.
    pub fn new(data: TableData) -> Result<Self, LocaleError> {
        let TableData {
            regions,
            gender,
            zodiac,
            constellations,
        } = data;
        for key in regions.keys() {
            if key.len() != 6 || !key.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LocaleError::MalformedTable {
                    message: format!("region key {key:?} is not a six-digit code"),
                });
            }
        }
        let zodiac = twelve(zodiac, "zodiac")?;
        let constellations = twelve(constellations, "constellation")?;
        Ok(Self {
            regions,
            gender,
            zodiac,
            constellations,
        })
    }

    pub(crate) fn from_data(data: &LocaleData) -> Self {
        Self {
            regions: data
                .regions
                .iter()
                .map(|&(code, name)| (code.to_owned(), name.to_owned()))
                .collect(),
            gender: GenderLabels {
                male: data.gender[0].to_owned(),
                female: data.gender[1].to_owned(),
            },
            zodiac: data.zodiac.map(str::to_owned),
            constellations: data.constellations.map(str::to_owned),
        }
    }

    /// Name of a division by six-digit code, if the table carries it.
    pub fn region_name(&self, code: &str) -> Option<&str> {
        self.regions.get(code).map(String::as_str)
    }

    /// All `(code, name)` pairs in code order.
    pub fn regions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.regions
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }

    pub fn gender_label(&self, gender: Gender) -> &str {
        self.gender.label(gender)
    }

    pub fn zodiac_name(&self, zodiac: Zodiac) -> &str {
        &self.zodiac[zodiac.index()]
    }

    pub fn constellation_name(&self, constellation: Constellation) -> &str {
        &self.constellations[constellation.index()]
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

impl TryFrom<TableData> for LocaleTable {
    type Error = LocaleError;

    fn try_from(data: TableData) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

fn twelve(names: Vec<String>, what: &str) -> Result<[String; 12], LocaleError> {
    names
        .try_into()
        .map_err(|names: Vec<String>| LocaleError::MalformedTable {
            message: format!("expected 12 {what} names, found {}", names.len()),
        })
}
