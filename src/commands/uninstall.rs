//! Uninstall command - Remove the whole support directory

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use super::utils::{self, quoted};
use crate::config::Config;

/// Execute the uninstall command
pub fn execute(config_path: Option<&Path>, debug: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let layout = config.layout()?;

    match layout.remove_all() {
        Ok(true) => {
            println!("{} {}", "Removed:".green(), quoted(layout.support_dir()));
            Ok(())
        }
        Ok(false) => {
            println!("Nothing installed at {}", quoted(layout.support_dir()));
            Ok(())
        }
        Err(err) => {
            let what = format!("Could not remove {}", quoted(layout.support_dir()));
            utils::report_error(&what, &err, debug);
            anyhow::bail!("some errors were reported")
        }
    }
}
