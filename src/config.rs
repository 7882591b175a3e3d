//! Platform-specific paths and the optional `config.json`

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::install::SupportLayout;

pub const DEFAULT_SUPPORT_DIR_NAME: &str = "automator_util";
pub const DEFAULT_PROJECTS_DIR_NAME: &str = "proj";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Get the user's home directory
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// Get the preferences directory
/// - macOS: ~/Library/Preferences/
/// - Linux: ~/.config/
/// - Windows: %APPDATA%/
pub fn preferences_dir() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        Ok(home_dir()?.join("Library").join("Preferences"))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir().context("Could not determine config directory")
    }
}

/// Get the application support directory
/// - macOS: ~/Library/Application Support/
/// - Linux: ~/.local/share/
/// - Windows: %APPDATA%/
pub fn app_support_dir() -> Result<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        Ok(home_dir()?.join("Library").join("Application Support"))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::data_dir().context("Could not determine data directory")
    }
}

/// Directory names read from `config.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub support_dir_name: String,
    pub projects_dir_name: String,
}

/// On-disk shape of `config.json`; null, empty, or absent names mean default
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "Application Support Subdirectory", default)]
    support_dir_name: Option<String>,

    #[serde(rename = "Projects Subdirectory", default)]
    projects_dir_name: Option<String>,
}

fn name_or_default(name: Option<String>, default: &str) -> String {
    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            support_dir_name: DEFAULT_SUPPORT_DIR_NAME.to_string(),
            projects_dir_name: DEFAULT_PROJECTS_DIR_NAME.to_string(),
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            support_dir_name: name_or_default(file.support_dir_name, DEFAULT_SUPPORT_DIR_NAME),
            projects_dir_name: name_or_default(file.projects_dir_name, DEFAULT_PROJECTS_DIR_NAME),
        }
    }
}

impl Config {
    /// Load a config file, falling back to defaults for absent, null, or empty keys
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let file: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse: {}", path.display()))?;
        Ok(file.into())
    }

    /// Load the config from an explicit path, or from `config.json` beside the
    /// running executable if present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        println!("{} {}", "Loading config:".dimmed(), path.display());
        Self::read(&path)
    }

    /// Resolve the support directory layout under the given base
    pub fn layout_in(&self, app_support_dir: &Path) -> SupportLayout {
        let support_dir = app_support_dir.join(&self.support_dir_name);
        let proj_dir = support_dir.join(&self.projects_dir_name);
        SupportLayout::new(support_dir, proj_dir)
    }

    /// Resolve the support directory layout under the platform location
    pub fn layout(&self) -> Result<SupportLayout> {
        Ok(self.layout_in(&app_support_dir()?))
    }
}

/// Directory holding the running executable and its sibling utilities
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable has no parent directory")
}

fn default_config_path() -> Option<PathBuf> {
    executable_dir().ok().map(|dir| dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_exist() {
        // These should not panic
        let _ = home_dir();
        let _ = preferences_dir();
        let _ = app_support_dir();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.support_dir_name, "automator_util");
        assert_eq!(config.projects_dir_name, "proj");
    }

    #[test]
    fn test_read_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"Application Support Subdirectory": "my_tools", "Projects Subdirectory": "projects"}"#,
        )
        .unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.support_dir_name, "my_tools");
        assert_eq!(config.projects_dir_name, "projects");
    }

    #[test]
    fn test_read_config_partial_and_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"Application Support Subdirectory": ""}"#).unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_config_null_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"Application Support Subdirectory": null, "Projects Subdirectory": "projects"}"#,
        )
        .unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.support_dir_name, "automator_util");
        assert_eq!(config.projects_dir_name, "projects");
    }

    #[test]
    fn test_read_config_all_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"Projects Subdirectory": null}"#).unwrap();

        assert_eq!(Config::read(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_read_config_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        assert!(Config::read(&path).is_err());
    }

    #[test]
    fn test_layout_in() {
        let layout = Config::default().layout_in(Path::new("/base"));
        assert_eq!(layout.support_dir(), Path::new("/base/automator_util"));
        assert_eq!(layout.proj_dir(), Path::new("/base/automator_util/proj"));
    }
}
