//! set_pref: store a workflow preference
//!
//! Usage: `set_pref [--json] [--echo] <file_name> <key> <value>`

use anyhow::Result;
use clap::Parser;

use automator_util::commands::prefs;

#[derive(Parser)]
#[command(name = "set_pref")]
#[command(about = "Store a preference value", long_about = None)]
#[command(version)]
struct Args {
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

    /// Print the stored value on a single line
    #[arg(long)]
    echo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let value = prefs::parse_value(&args.value, args.json)?;
    prefs::set(&args.file_name, &args.key, value, args.echo)
}
