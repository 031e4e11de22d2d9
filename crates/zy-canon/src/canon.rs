//! The typed reference table, built once from static data.

use std::collections::HashMap;
use std::path::Path;

use zy_cast::HexKey;

use crate::error::{CanonError, CanonResult};
use crate::record::Hexagram;

/// The 64-hexagram reference table keyed by figure key.
///
/// Built once at startup from the static dataset and consulted by exact
/// match; the dataset itself is read-only and is not validated beyond
/// parsing.
#[derive(Debug, Clone, Default)]
pub struct Canon {
    records: HashMap<HexKey, Hexagram>,
}

impl Canon {
    /// Build a table from already-parsed records.
    pub fn from_records(records: impl IntoIterator<Item = Hexagram>) -> Self {
        Self {
            records: records.into_iter().map(|h| (h.key, h)).collect(),
        }
    }

    /// Parse a table from the reference dataset's JSON text.
    pub fn from_json_str(json: &str) -> CanonResult<Self> {
        let records: Vec<Hexagram> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load a table from a reference dataset file.
    pub fn load(path: impl AsRef<Path>) -> CanonResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Look up the record for a key by exact match.
    pub fn hexagram(&self, key: HexKey) -> CanonResult<&Hexagram> {
        self.records.get(&key).ok_or(CanonError::UnknownKey(key))
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(number: u8, name: &str, key: &str) -> Hexagram {
        Hexagram {
            number,
            name: name.to_string(),
            glyph: String::new(),
            key: key.parse().unwrap(),
            judgment: format!("Judgment of {name}."),
            image: format!("Image of {name}."),
            lines: BTreeMap::new(),
        }
    }

    #[test]
    fn lookup_by_exact_key() {
        let canon = Canon::from_records([
            record(1, "The Creative", "111111"),
            record(2, "The Receptive", "000000"),
        ]);
        assert_eq!(canon.len(), 2);
        let hit = canon.hexagram("111111".parse().unwrap()).unwrap();
        assert_eq!(hit.number, 1);
    }

    #[test]
    fn lookup_miss_is_a_data_fault() {
        let canon = Canon::from_records([record(1, "The Creative", "111111")]);
        let err = canon.hexagram("000000".parse().unwrap()).unwrap_err();
        assert!(matches!(err, CanonError::UnknownKey(_)));
        assert!(err.to_string().contains("000000"));
    }

    #[test]
    fn parses_json_array() {
        let json = r#"[
            { "number": 1, "name": "The Creative", "key": "111111" },
            { "number": 2, "name": "The Receptive", "key": "000000" }
        ]"#;
        let canon = Canon::from_json_str(json).unwrap();
        assert_eq!(canon.len(), 2);
        assert!(!canon.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Canon::from_json_str("{ not json"),
            Err(CanonError::Parse(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            Canon::load("/nonexistent/canon.json"),
            Err(CanonError::Io(_))
        ));
    }
}
