//! automator-util: support-directory installer and preference accessor for
//! Automator workflows

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use automator_util::commands;
use automator_util::install::Mode;

#[derive(Parser)]
#[command(name = "automator-util")]
#[command(about = "Helpers for Automator workflows", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the accessor utilities and any projects into the support directory
    Install {
        /// Project paths to place under the projects subdirectory
        project_paths: Vec<PathBuf>,

        /// Copy instead of placing symbolic links, making the support directory self-contained
        #[arg(short, long)]
        copy: bool,

        /// Config file naming the support and projects subdirectories
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print error causes
        #[arg(long)]
        debug: bool,
    },

    /// Remove the support directory and everything in it
    Uninstall {
        /// Config file naming the support and projects subdirectories
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print error causes
        #[arg(long)]
        debug: bool,
    },

    /// Print a preference value, or a default if it is not set
    GetPref {
        /// Preference file name (.json is appended if missing)
        file_name: String,

        /// Preference key
        key: String,

        /// Value printed when the key is not set
        #[arg(default_value = "", allow_hyphen_values = true)]
        default: String,

        /// Parse the default as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store a preference value
    SetPref {
        /// Preference file name (.json is appended if missing)
        file_name: String,

        /// Preference key
        key: String,

        /// Value to store
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Parse the value as JSON
        #[arg(long)]
        json: bool,

        /// Print the stored value
        #[arg(long)]
        echo: bool,
    },

    /// Print a list of preference values, one per line
    LoadPrefs {
        /// Preference file name (.json is appended if missing)
        file_name: String,

        /// Values printed when the file does not exist
        defaults: Vec<String>,
    },

    /// Store a list of preference values and print them back
    SavePrefs {
        /// Preference file name (.json is appended if missing)
        file_name: String,

        /// Values to store
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Install {
            project_paths,
            copy,
            config,
            debug,
        } => {
            let mode = if copy { Mode::Copy } else { Mode::Symlink };
            if debug {
                println!("{}", "(DEBUG MODE - error causes will be shown)".blue());
            }
            commands::install::execute(&project_paths, mode, config.as_deref(), debug)?;
        }

        Commands::Uninstall { config, debug } => {
            commands::uninstall::execute(config.as_deref(), debug)?;
        }

        Commands::GetPref {
            file_name,
            key,
            default,
            json,
        } => {
            let default = commands::prefs::parse_value(&default, json)?;
            commands::prefs::get(&file_name, &key, default)?;
        }

        Commands::SetPref {
            file_name,
            key,
            value,
            json,
            echo,
        } => {
            let value = commands::prefs::parse_value(&value, json)?;
            commands::prefs::set(&file_name, &key, value, echo)?;
        }

        Commands::LoadPrefs {
            file_name,
            defaults,
        } => {
            commands::prefs::load(&file_name, &defaults)?;
        }

        Commands::SavePrefs { file_name, values } => {
            commands::prefs::save(&file_name, &values)?;
        }
    }

    Ok(())
}
