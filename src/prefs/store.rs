//! Key/value preference files
//!
//! A preference file is a flat JSON object stored in the platform
//! preferences directory, e.g. `~/Library/Preferences/com.example.test.json`.
//! A missing file reads as an empty mapping.

use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::format;
use crate::error::{Error, Result};

const JSON_SUFFIX: &str = ".json";

/// Build the path of a preference file, appending `.json` unless present
pub fn resolve_pref_path(prefs_dir: &Path, file_name: &str) -> PathBuf {
    if file_name.ends_with(JSON_SUFFIX) {
        prefs_dir.join(file_name)
    } else {
        prefs_dir.join(format!("{}{}", file_name, JSON_SUFFIX))
    }
}

/// Read and parse a JSON file, returning `None` if it does not exist
pub(super) fn read_json(path: &Path) -> Result<Option<Value>> {
    let content = match fs::read(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };

    serde_json::from_slice(&content)
        .map(Some)
        .map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Write a value as pretty JSON, creating parent directories as needed
pub(super) fn write_json(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let bytes = format::to_pretty_json(value).map_err(|source| Error::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

/// Load the whole mapping from a preference file
pub fn read_prefs(path: &Path) -> Result<Map<String, Value>> {
    match read_json(path)? {
        None => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(Error::UnexpectedJson {
            path: path.to_path_buf(),
            expected: "object",
        }),
    }
}

/// Look up a key, falling back to `default` if the file or key is absent
pub fn get(path: &Path, key: &str, default: Value) -> Result<Value> {
    let mut prefs = read_prefs(path)?;
    Ok(prefs.remove(key.trim()).unwrap_or(default))
}

/// Store a key, rewriting the whole file
///
/// The value is stored exactly as given and returned for echoing.
pub fn set(path: &Path, key: &str, value: Value) -> Result<Value> {
    let mut prefs = read_prefs(path)?;
    prefs.insert(key.trim().to_string(), value.clone());
    write_json(path, &Value::Object(prefs))?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_appends_suffix() {
        let path = resolve_pref_path(Path::new("/prefs"), "com.example.test");
        assert_eq!(path, PathBuf::from("/prefs/com.example.test.json"));
    }

    #[test]
    fn test_resolve_keeps_existing_suffix() {
        let path = resolve_pref_path(Path::new("/prefs"), "com.example.test.json");
        assert_eq!(path, PathBuf::from("/prefs/com.example.test.json"));
    }

    #[test]
    fn test_get_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_pref_path(dir.path(), "com.example.none");

        let value = get(&path, "name", json!("no name")).unwrap();
        assert_eq!(value, json!("no name"));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_pref_path(dir.path(), "com.example.test");

        set(&path, "name", json!("John Doe")).unwrap();
        assert_eq!(get(&path, "name", json!("no name")).unwrap(), json!("John Doe"));
        assert_eq!(get(&path, "name", Value::Null).unwrap(), json!("John Doe"));
    }

    #[test]
    fn test_get_missing_key_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_pref_path(dir.path(), "com.example.test");

        set(&path, "name", json!("John Doe")).unwrap();
        assert_eq!(get(&path, "age", json!(7)).unwrap(), json!(7));
    }

    #[test]
    fn test_set_preserves_other_keys_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        set(&path, "zeta", json!(1)).unwrap();
        set(&path, "alpha", json!({"nested": [1, 2]})).unwrap();
        set(&path, "zeta", json!(2)).unwrap();

        let prefs = read_prefs(&path).unwrap();
        let keys: Vec<&str> = prefs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(prefs["zeta"], json!(2));
        assert_eq!(prefs["alpha"], json!({"nested": [1, 2]}));
    }

    #[test]
    fn test_set_trims_key_but_keeps_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let stored = set(&path, "  name \n", json!("John Doe  \n")).unwrap();
        assert_eq!(stored, json!("John Doe  \n"));
        assert_eq!(get(&path, "name", Value::Null).unwrap(), json!("John Doe  \n"));
        assert_eq!(get(&path, " name ", Value::Null).unwrap(), json!("John Doe  \n"));

        // Trailing whitespace only disappears when printed
        let value = get(&path, "name", Value::Null).unwrap();
        assert_eq!(format::single_line(&value), "John Doe");
    }

    #[test]
    fn test_set_round_trips_any_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        for value in [
            json!("  padded  "),
            json!("multi\nline\n"),
            json!(3.5),
            Value::Null,
            json!({"list": [1, "two", false]}),
        ] {
            set(&path, "k", value.clone()).unwrap();
            assert_eq!(get(&path, "k", json!("default")).unwrap(), value);
        }
    }

    #[test]
    fn test_invalid_utf8_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, b"{\"name\": \"\xff\xfe\"}").unwrap();

        let err = get(&path, "name", Value::Null).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_set_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");

        set(&path, "k", json!(true)).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_file_format_is_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        set(&path, "name", json!("John Doe")).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n \"name\": \"John Doe\"\n}");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let err = get(&path, "name", json!("default")).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));

        let err = set(&path, "name", json!("x")).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        // The malformed file is left untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_non_object_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = get(&path, "name", Value::Null).unwrap_err();
        assert!(matches!(err, Error::UnexpectedJson { expected: "object", .. }));
    }
}
