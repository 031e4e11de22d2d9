//! The six-bit figure key used for reference-table lookup.

use std::str::FromStr;

use crate::error::CastError;
use crate::line::Polarity;

/// A figure's six polarities packed into a typed lookup key.
///
/// The textual form is six `1`/`0` characters ordered top line first,
/// the reverse of casting order: the reference table reads hexagrams
/// from the top down, while coins are cast from the bottom up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexKey(u8);

impl HexKey {
    /// Build a key from six polarities in casting order (bottom line first).
    pub fn from_polarities_bottom_up(polarities: &[Polarity; 6]) -> Self {
        let mut bits = 0u8;
        for (i, p) in polarities.iter().enumerate() {
            if *p == Polarity::Yang {
                bits |= 1 << i;
            }
        }
        Self(bits)
    }

    /// The six polarities in casting order (bottom line first).
    pub fn polarities_bottom_up(self) -> [Polarity; 6] {
        std::array::from_fn(|i| {
            if self.0 & (1 << i) != 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            }
        })
    }

    /// The six polarities in display order (top line first).
    pub fn polarities_top_down(self) -> [Polarity; 6] {
        let mut out = self.polarities_bottom_up();
        out.reverse();
        out
    }
}

impl std::fmt::Display for HexKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for p in self.polarities_top_down() {
            f.write_str(match p {
                Polarity::Yang => "1",
                Polarity::Yin => "0",
            })?;
        }
        Ok(())
    }
}

impl FromStr for HexKey {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 {
            return Err(CastError::InvalidKey(s.to_string()));
        }
        let mut bits = 0u8;
        for (i, c) in s.chars().enumerate() {
            match c {
                '1' => bits |= 1 << (5 - i),
                '0' => {}
                _ => return Err(CastError::InvalidKey(s.to_string())),
            }
        }
        Ok(Self(bits))
    }
}

impl serde::Serialize for HexKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HexKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
