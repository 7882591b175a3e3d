//! Preference storage for workflows

pub mod format;
pub mod list;
pub mod store;

pub use format::single_line;
pub use list::{load_list, save_list};
pub use store::{get, read_prefs, resolve_pref_path, set};
