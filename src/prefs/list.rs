//! List-valued preference files
//!
//! Some workflows store an ordered list of values instead of a keyed
//! mapping. These files hold a JSON array and share the naming and location
//! rules of keyed preference files.

use serde_json::Value;
use std::path::Path;

use super::store::{read_json, write_json};
use crate::error::{Error, Result};

/// Load the stored list, or `defaults` if the file does not exist
pub fn load_list(path: &Path, defaults: Vec<Value>) -> Result<Vec<Value>> {
    match read_json(path)? {
        None => Ok(defaults),
        Some(Value::Array(values)) => Ok(values),
        Some(_) => Err(Error::UnexpectedJson {
            path: path.to_path_buf(),
            expected: "array",
        }),
    }
}

/// Replace the stored list, returning the values for echoing
pub fn save_list(path: &Path, values: Vec<Value>) -> Result<Vec<Value>> {
    write_json(path, &Value::Array(values.clone()))?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::format::single_line;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_load_missing_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");

        let values = load_list(&path, vec![json!("a"), json!("b")]).unwrap();
        assert_eq!(values, vec![json!("a"), json!("b")]);
    }

    #[test]
    fn test_save_then_load_ignores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");

        save_list(&path, vec![json!("first "), json!("second\n")]).unwrap();
        let values = load_list(&path, vec![json!("default")]).unwrap();
        assert_eq!(values, vec![json!("first "), json!("second\n")]);

        let printed: Vec<String> = values.iter().map(single_line).collect();
        assert_eq!(printed, ["first", "second"]);
    }

    #[test]
    fn test_load_object_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        let err = load_list(&path, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::UnexpectedJson { expected: "array", .. }));
    }
}
