//! get_pref: print a stored workflow preference
//!
//! Usage: `get_pref <file_name> <key> [<default>]`

use anyhow::Result;
use clap::Parser;

use automator_util::commands::prefs;

#[derive(Parser)]
#[command(name = "get_pref")]
#[command(about = "Print a preference value, or a default if it is not set", long_about = None)]
#[command(version)]
struct Args {
    /// Preference file name (.json is appended if missing)
    file_name: String,

    /// Preference key
    key: String,

    /// Value printed when the file or key is missing
    #[arg(default_value = "", allow_hyphen_values = true)]
    default: String,

    /// Parse the default as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default = prefs::parse_value(&args.default, args.json)?;
    prefs::get(&args.file_name, &args.key, default)
}
