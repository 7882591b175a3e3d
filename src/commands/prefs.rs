//! Preference commands - Read and write workflow preferences
//!
//! Output is kept to one value per line so the next workflow action can
//! consume it as arguments.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;

use crate::config;
use crate::prefs::{self, format};

fn pref_path(file_name: &str) -> Result<PathBuf> {
    let dir = config::preferences_dir()?;
    Ok(prefs::resolve_pref_path(&dir, file_name))
}

/// Interpret a command-line value as a string, or as JSON when `json` is set
pub fn parse_value(raw: &str, json: bool) -> Result<Value> {
    if json {
        serde_json::from_str(raw).with_context(|| format!("Invalid JSON value: {}", raw))
    } else {
        Ok(Value::String(raw.to_string()))
    }
}

/// Print the stored value for `key`, or `default` if there is none
pub fn get(file_name: &str, key: &str, default: Value) -> Result<()> {
    let path = pref_path(file_name)?;
    let value = prefs::get(&path, key, default)?;
    println!("{}", format::single_line(&value));
    Ok(())
}

/// Store `value` under `key`, optionally echoing it back
pub fn set(file_name: &str, key: &str, value: Value, echo: bool) -> Result<()> {
    let path = pref_path(file_name)?;
    let stored = prefs::set(&path, key, value)?;
    if echo {
        println!("{}", format::single_line(&stored));
    }
    Ok(())
}

/// Print each stored list value on its own line, or the defaults
pub fn load(file_name: &str, defaults: &[String]) -> Result<()> {
    let path = pref_path(file_name)?;
    let defaults = defaults.iter().cloned().map(Value::String).collect();
    for value in prefs::load_list(&path, defaults)? {
        println!("{}", format::single_line(&value));
    }
    Ok(())
}

/// Store a list of values and echo them back one per line
pub fn save(file_name: &str, values: &[String]) -> Result<()> {
    let path = pref_path(file_name)?;
    let values = values.iter().cloned().map(Value::String).collect();
    for value in prefs::save_list(&path, values)? {
        println!("{}", format::single_line(&value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_value_plain_string() {
        assert_eq!(parse_value("42", false).unwrap(), json!("42"));
        assert_eq!(parse_value("John Doe", false).unwrap(), json!("John Doe"));
    }

    #[test]
    fn test_parse_value_json() {
        assert_eq!(parse_value("42", true).unwrap(), json!(42));
        assert_eq!(
            parse_value(r#"{"a": [true, null]}"#, true).unwrap(),
            json!({"a": [true, null]})
        );
    }

    #[test]
    fn test_parse_value_invalid_json() {
        let err = parse_value("John Doe", true).unwrap_err();
        assert!(err.to_string().contains("John Doe"));
    }
}
