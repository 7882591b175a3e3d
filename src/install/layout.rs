//! Support directory layout
//!
//! ```text
//! <app support>/automator_util/
//! ├── get_pref          utility entries
//! ├── set_pref
//! └── proj/
//!     └── <project>     one entry per installed project
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where an entry lands inside the support directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Top level of the support directory
    Utility,
    /// Inside the projects subdirectory
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportLayout {
    support_dir: PathBuf,
    proj_dir: PathBuf,
}

impl SupportLayout {
    pub fn new(support_dir: PathBuf, proj_dir: PathBuf) -> Self {
        Self {
            support_dir,
            proj_dir,
        }
    }

    pub fn support_dir(&self) -> &Path {
        &self.support_dir
    }

    pub fn proj_dir(&self) -> &Path {
        &self.proj_dir
    }

    /// Destination path for an entry of the given kind and name
    pub fn destination(&self, kind: EntryKind, name: &OsStr) -> PathBuf {
        match kind {
            EntryKind::Utility => self.support_dir.join(name),
            EntryKind::Project => self.proj_dir.join(name),
        }
    }

    /// Create the support directory if it is missing
    ///
    /// Returns true if the directory had to be created.
    pub fn ensure(&self) -> Result<bool> {
        if self.support_dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.support_dir).map_err(|e| Error::io(&self.support_dir, e))?;
        Ok(true)
    }

    /// Remove the whole support directory
    ///
    /// Returns false if there was nothing to remove.
    pub fn remove_all(&self) -> Result<bool> {
        match fs::symlink_metadata(&self.support_dir) {
            Ok(meta) if meta.is_dir() => {
                fs::remove_dir_all(&self.support_dir)
                    .map_err(|e| Error::io(&self.support_dir, e))?;
                Ok(true)
            }
            Ok(_) => {
                fs::remove_file(&self.support_dir).map_err(|e| Error::io(&self.support_dir, e))?;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(&self.support_dir, e)),
        }
    }
}
