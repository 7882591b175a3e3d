//! Install command - Link or copy utilities and projects into the support directory

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use super::utils::{self, quoted};
use crate::config::{self, Config};
use crate::install::{InstallItem, Installer, Mode, Outcome, Placed};

/// Execute the install command
pub fn execute(
    projects: &[PathBuf],
    mode: Mode,
    config_path: Option<&Path>,
    debug: bool,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let layout = config.layout()?;
    let home = config::home_dir()?;

    let mut items: Vec<InstallItem> = utils::utility_sources(&config::executable_dir()?)
        .into_iter()
        .map(InstallItem::utility)
        .collect();
    items.extend(projects.iter().map(InstallItem::project));

    println!("Installing into: {}", quoted(layout.support_dir()));
    println!(
        "  Mode: {}",
        match mode {
            Mode::Symlink => "symbolic links",
            Mode::Copy => "copies",
        }
    );
    println!();

    let installer = Installer::new(&layout, mode, home);
    let report = installer
        .run(items, |outcome| print_outcome(outcome, debug))
        .with_context(|| format!("Failed to prepare: {}", layout.support_dir().display()))?;

    let installed = report.installed().count();
    let failed = report.outcomes.len() - installed;

    println!();
    println!(
        "Installed {} item(s), {} failed",
        installed.to_string().green(),
        if failed > 0 {
            failed.to_string().red().to_string()
        } else {
            "0".to_string()
        }
    );

    if !report.is_success() {
        bail!("some errors were reported");
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome, debug: bool) {
    match &outcome.result {
        Ok(installed) => {
            if installed.replaced {
                println!("{} {}", "Replacing:".yellow(), quoted(&installed.destination));
            }
            match &installed.placed {
                Placed::Link { target } => println!(
                    "{} {} -> {}",
                    "Linked:".green(),
                    quoted(&installed.destination),
                    quoted(target)
                ),
                Placed::Copy { files } => println!(
                    "{} {} -> {} ({} file(s))",
                    "Copied:".green(),
                    quoted(&installed.source),
                    quoted(&installed.destination),
                    files
                ),
            }
        }
        Err(err) => {
            let what = format!("Could not install {}", quoted(&outcome.item.source));
            utils::report_error(&what, err, debug);
        }
    }
}
