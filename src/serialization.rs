//! Serde support, behind the `serialization` feature.

use crate::tally::Tally;
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tally", 2)?;
        state.serialize_field("duplicates", &self.duplicates)?;
        state.serialize_field("uniques", &self.uniques)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::find_duplicate_names;

    #[test]
    fn tally_as_json() {
        let tally = find_duplicate_names(["Somchai", "somchai", "Anan"]);
        let value = serde_json::to_value(&tally).unwrap();

        assert_eq!(serde_json::json!({"somchai": 2}), value["duplicates"]);
        assert_eq!(serde_json::json!(["anan"]), value["uniques"]);
    }
}
