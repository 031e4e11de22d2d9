use std::path::Path;

use zy_canon::CanonError;
use zy_cast::HexKey;

use crate::render;

pub fn run(data: &Path, key_str: &str) -> Result<(), String> {
    let canon = super::load_canon(data)?;
    let key: HexKey = key_str.parse().map_err(|e| format!("{e}"))?;

    match canon.hexagram(key) {
        Ok(hexagram) => {
            render::print_record("Hexagram", hexagram);
            Ok(())
        }
        // A missing key means broken reference data, not a bad query;
        // report it plainly instead of failing.
        Err(CanonError::UnknownKey(_)) => {
            println!("  No match for key {key} in the reference data.");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
