//! The decoded profile and its JSON renderings.

use serde::{Deserialize, Serialize};
use std::io;

/// Everything decoded from one number under one locale.
///
/// Field order is part of the wire contract: serialized output always lists
/// `area`, `province`, `city`, `county`, `gender`, `birthday`, `zodiac`,
/// `age`, `constellation` in that order. The three division fields are `None`
/// when the locale table does not carry the looked-up code; `area` keeps its
/// separators either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub area: String,
    pub province: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub gender: String,
    pub birthday: String,
    pub zodiac: String,
    pub age: u32,
    pub constellation: String,
}

impl Profile {
    /// Compact JSON with non-ASCII characters left as raw UTF-8.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Compact JSON with every non-ASCII character escaped as `\uXXXX`
    /// (UTF-16 code units, lowercase hex), for 7-bit-clean consumers.
    pub fn to_json_ascii(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::with_capacity(256);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
        self.serialize(&mut serializer)?;
        // The formatter only ever writes ASCII bytes.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Formatter that escapes non-ASCII string content; everything else matches
/// the compact formatter.
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
