//! Support directory install manager

pub mod copy;
pub mod installer;
pub mod layout;
pub mod link;

pub use installer::{InstallItem, InstallReport, Installed, Installer, Mode, Outcome, Placed};
pub use layout::{EntryKind, SupportLayout};
