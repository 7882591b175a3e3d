//! CLI commands

pub mod install;
pub mod prefs;
pub mod uninstall;
pub mod utils;
