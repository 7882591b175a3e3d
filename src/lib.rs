//! automator-util library
//!
//! Helpers for Automator workflows: a JSON preference accessor, and an
//! install manager that places links or copies of the utilities and of
//! external projects into a well-known support directory.

pub mod commands;
pub mod config;
pub mod error;
pub mod install;
pub mod prefs;
