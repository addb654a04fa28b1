//! Parsing user-supplied data text into a record.
//!
//! The data file is free-form YAML. While the user types, the text spends
//! most of its time in a half-finished state, so parsing is split from
//! rendering: callers decide whether a [`DataError`] aborts the operation
//! or falls back to an empty record.

use serde_yaml::{Mapping, Value};

/// The reserved top-level key naming the repeat collection.
///
/// A sequence under this key makes the template render once per element;
/// every other top-level key is ordinary data.
pub const REPEAT_KEY: &str = "loop";

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("invalid data: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parse raw data text into a record (a string-keyed mapping).
///
/// Valid YAML that isn't a mapping at the top level (a scalar, a sequence,
/// an empty document) yields an empty record; only text that fails to parse
/// at all is an error.
pub fn parse_record(text: &str) -> Result<Mapping, DataError> {
    let value: Value = serde_yaml::from_str(text)?;

    Ok(match value {
        Value::Mapping(record) => record,
        _ => Mapping::new(),
    })
}

/// The repeat collection, if the record carries a sequence under
/// [`REPEAT_KEY`].
///
/// A `loop` value of any other shape (scalar, mapping, null) means the
/// record is not repeating; it is never an error. Templates shadow the key
/// with the synthesized loop context either way, so a malformed collection
/// simply renders once.
pub fn repeat_collection(record: &Mapping) -> Option<&Vec<Value>> {
    match record.get(REPEAT_KEY) {
        Some(Value::Sequence(elements)) => Some(elements),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping() {
        let record = parse_record("from: Julie Lights\nprice: 32").unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("price"), Some(&Value::from(32)));
    }

    #[test]
    fn test_parse_empty_text_is_empty_record() {
        let record = parse_record("").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_parse_scalar_is_empty_record() {
        let record = parse_record("just a string").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_parse_sequence_is_empty_record() {
        let record = parse_record("- 1\n- 2").unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(parse_record("key: [unclosed").is_err());
    }

    #[test]
    fn test_repeat_collection_sequence() {
        let record = parse_record("loop:\n  - date: 3/14/2012\n  - date: 4/27/2013").unwrap();
        let elements = repeat_collection(&record).unwrap();
        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn test_repeat_collection_absent() {
        let record = parse_record("from: Julie Lights").unwrap();
        assert!(repeat_collection(&record).is_none());
    }

    #[test]
    fn test_repeat_collection_non_sequence_is_ignored() {
        let record = parse_record("loop: 42").unwrap();
        assert!(repeat_collection(&record).is_none());

        let record = parse_record("loop:\n  date: 3/14/2012").unwrap();
        assert!(repeat_collection(&record).is_none());
    }
}
