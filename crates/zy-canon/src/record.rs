//! Hexagram records as stored in the reference data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use zy_cast::HexKey;

/// Commentary attached to one line position of a hexagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineText {
    /// The line's oracle text.
    #[serde(default)]
    pub text: String,
    /// Supplementary commentary on the line.
    #[serde(default)]
    pub comments: String,
}

/// One entry of the 64-hexagram reference table.
///
/// Line commentary is keyed 1..6 bottom to top, matching casting order
/// rather than the top-first order of the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// Traditional number, 1..=64.
    pub number: u8,
    /// Short English name.
    pub name: String,
    /// Display glyph.
    #[serde(default)]
    pub glyph: String,
    /// Six-bit lookup key, top line first.
    pub key: HexKey,
    /// The judgment text.
    #[serde(default)]
    pub judgment: String,
    /// The image text.
    #[serde(default)]
    pub image: String,
    /// Per-line commentary keyed by position 1..6, bottom up.
    #[serde(default)]
    pub lines: BTreeMap<u8, LineText>,
}

impl Hexagram {
    /// Display title in the form `"1. The Creative"`.
    pub fn title(&self) -> String {
        format!("{}. {}", self.number, self.name)
    }

    /// Commentary for the given line position (1..6, bottom up), if any.
    pub fn line_text(&self, position: u8) -> Option<&LineText> {
        self.lines.get(&position)
    }
}
