//! Attributes derived from the number itself: gender, zodiac animal, and
//! constellation. Variants are language-neutral; localized names live in the
//! locale tables.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as encoded by the sequence code.
///
/// GB 11643-1999 assigns odd sequence codes to males and even codes to
/// females, so only the last sequence digit (position 16) matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Decode the parity of the last sequence digit.
    pub fn from_sequence_digit(digit: u32) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Animal of the twelve-year cycle a birth year falls in.
///
/// Variants are declared in the 1901-anchored order: 1901 was a year of the
/// Ox, so `|year - 1901| % 12` indexes this declaration order directly. Years
/// before the anchor reuse the absolute difference rather than walking the
/// cycle backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zodiac {
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
    Rat,
}

impl Zodiac {
    /// All animals in table order.
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Ox,
        Zodiac::Tiger,
        Zodiac::Rabbit,
        Zodiac::Dragon,
        Zodiac::Snake,
        Zodiac::Horse,
        Zodiac::Goat,
        Zodiac::Monkey,
        Zodiac::Rooster,
        Zodiac::Dog,
        Zodiac::Pig,
        Zodiac::Rat,
    ];

    /// Animal for a Gregorian birth year.
    pub fn from_year(year: i32) -> Self {
        Self::ALL[(year - 1901).unsigned_abs() as usize % 12]
    }

    /// Position in [`Zodiac::ALL`], usable as an index into name tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zodiac::Ox => "ox",
            Zodiac::Tiger => "tiger",
            Zodiac::Rabbit => "rabbit",
            Zodiac::Dragon => "dragon",
            Zodiac::Snake => "snake",
            Zodiac::Horse => "horse",
            Zodiac::Goat => "goat",
            Zodiac::Monkey => "monkey",
            Zodiac::Rooster => "rooster",
            Zodiac::Dog => "dog",
            Zodiac::Pig => "pig",
            Zodiac::Rat => "rat",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day of month on which each sign begins, January first.
///
/// A birthday before its month's edge day belongs to the sign that started the
/// previous month.
pub const CONSTELLATION_EDGE_DAYS: [u32; 12] = [21, 20, 21, 20, 21, 22, 23, 23, 23, 24, 22, 21];

/// Western zodiac sign a birthday falls in.
///
/// Variants are declared by cutoff month from January: the sign beginning in
/// month `m` sits at index `m - 1`, so Aquarius (beginning January 21) comes
/// first and Capricorn (beginning December 21) last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constellation {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

impl Constellation {
    /// All signs in table order.
    pub const ALL: [Constellation; 12] = [
        Constellation::Aquarius,
        Constellation::Pisces,
        Constellation::Aries,
        Constellation::Taurus,
        Constellation::Gemini,
        Constellation::Cancer,
        Constellation::Leo,
        Constellation::Virgo,
        Constellation::Libra,
        Constellation::Scorpio,
        Constellation::Sagittarius,
        Constellation::Capricorn,
    ];

    /// Sign for a month and day of month.
    ///
    /// Returns `None` when `month` is not in `1..=12` or `day` is not in
    /// `1..=31`. Whether the day exists in that month is the caller's
    /// concern. Early-January days wrap to Capricorn, which begins the
    /// previous December. Some widely circulated decoders collapse the whole
    /// Aquarius range onto Capricorn through an off-by-one in that wrap; this
    /// one keeps the two signs apart.
    pub fn from_month_day(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self::ALL[Self::index_for(month as usize, day)])
    }

    /// Sign for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::ALL[Self::index_for(date.month() as usize, date.day())]
    }

    /// Position in [`Constellation::ALL`], usable as an index into name
    /// tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Constellation::Aquarius => "aquarius",
            Constellation::Pisces => "pisces",
            Constellation::Aries => "aries",
            Constellation::Taurus => "taurus",
            Constellation::Gemini => "gemini",
            Constellation::Cancer => "cancer",
            Constellation::Leo => "leo",
            Constellation::Virgo => "virgo",
            Constellation::Libra => "libra",
            Constellation::Scorpio => "scorpio",
            Constellation::Sagittarius => "sagittarius",
            Constellation::Capricorn => "capricorn",
        }
    }

    // month is 1-based and already range-checked.
    fn index_for(month: usize, day: u32) -> usize {
        if day < CONSTELLATION_EDGE_DAYS[month - 1] {
            (month + 10) % 12
        } else {
            month - 1
        }
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
