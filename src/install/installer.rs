//! Install sources into the support directory as links or copies

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::copy;
use super::layout::{EntryKind, SupportLayout};
use super::link;
use crate::error::{Error, Result};

/// How entries are materialized in the support directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Place a symbolic link pointing at the source
    #[default]
    Symlink,
    /// Place an independent copy of the source
    Copy,
}

/// A source path and where it should land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallItem {
    pub source: PathBuf,
    pub kind: EntryKind,
}

impl InstallItem {
    pub fn utility<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
            kind: EntryKind::Utility,
        }
    }

    pub fn project<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: source.into(),
            kind: EntryKind::Project,
        }
    }
}

/// What was placed at the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placed {
    /// Symbolic link storing this target
    Link { target: PathBuf },
    /// Copy containing this many regular files
    Copy { files: usize },
}

/// A successfully installed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub placed: Placed,
    /// An earlier entry of the same name was removed first
    pub replaced: bool,
}

/// Result of installing one item
#[derive(Debug)]
pub struct Outcome {
    pub item: InstallItem,
    pub result: Result<Installed>,
}

/// Per-item results of an install run, in input order
#[derive(Debug, Default)]
pub struct InstallReport {
    pub outcomes: Vec<Outcome>,
}

impl InstallReport {
    pub fn installed(&self) -> impl Iterator<Item = &Installed> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&InstallItem, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.item, e)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

pub struct Installer<'a> {
    layout: &'a SupportLayout,
    mode: Mode,
    home: PathBuf,
}

impl<'a> Installer<'a> {
    /// `home` decides which links get relative targets
    pub fn new(layout: &'a SupportLayout, mode: Mode, home: PathBuf) -> Self {
        Self { layout, mode, home }
    }

    /// Install every item in order
    ///
    /// Fails only if the support directory itself cannot be created. Items
    /// succeed or fail independently after that and nothing is rolled back.
    /// When two items map to the same destination the first one wins and the
    /// later ones fail with [`Error::DuplicateName`].
    pub fn run<F>(&self, items: Vec<InstallItem>, mut on_outcome: F) -> Result<InstallReport>
    where
        F: FnMut(&Outcome),
    {
        self.layout.ensure()?;

        let mut claimed: HashSet<PathBuf> = HashSet::new();
        let mut report = InstallReport::default();

        for item in items {
            let result = self.resolve(&item).and_then(|resolved| {
                if !claimed.insert(resolved.destination.clone()) {
                    return Err(Error::DuplicateName {
                        name: file_name_lossy(&resolved.destination),
                        path: resolved.source,
                    });
                }
                self.place(resolved)
            });

            let outcome = Outcome { item, result };
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    /// Install a single item, replacing any entry of the same name
    pub fn install(&self, item: &InstallItem) -> Result<Installed> {
        let resolved = self.resolve(item)?;
        self.place(resolved)
    }

    /// Work out every path an item needs before anything is removed
    ///
    /// Sources that contain their destination, or lie inside it, are
    /// rejected either as given or after following links.
    fn resolve(&self, item: &InstallItem) -> Result<Resolved> {
        let source = std::path::absolute(&item.source).map_err(|e| Error::io(&item.source, e))?;
        let name = source
            .file_name()
            .ok_or_else(|| Error::InvalidSource {
                path: source.clone(),
                reason: "it has no final path component",
            })?
            .to_os_string();

        let real_source = fs::canonicalize(&source).map_err(|e| Error::io(&source, e))?;
        let destination = self.layout.destination(item.kind, &name);
        let real_destination = canonical_location(&destination)?;

        if overlaps(&source, &destination) || overlaps(&real_source, &real_destination) {
            return Err(Error::InvalidSource {
                path: source,
                reason: "it overlaps its install destination",
            });
        }

        Ok(Resolved {
            source,
            real_source,
            destination,
        })
    }

    fn place(&self, resolved: Resolved) -> Result<Installed> {
        let Resolved {
            source,
            real_source,
            destination,
        } = resolved;

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let replaced = remove_existing(&destination)?;

        let placed = match self.mode {
            Mode::Symlink => {
                let target = link::link_target(&source, &destination, &self.home);
                link::create_symlink(&target, &destination, real_source.is_dir())
                    .map_err(|e| Error::io(&destination, e))?;
                Placed::Link { target }
            }
            Mode::Copy => {
                let files = copy::copy_tree(&real_source, &destination)?;
                Placed::Copy { files }
            }
        };

        Ok(Installed {
            source,
            destination,
            placed,
            replaced,
        })
    }
}

/// Paths for one item, resolved up front
struct Resolved {
    /// Absolute, links not followed
    source: PathBuf,
    /// Fully canonical
    real_source: PathBuf,
    destination: PathBuf,
}

fn overlaps(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Canonicalize `path` without following its final component
///
/// Trailing components that do not exist yet are appended verbatim to the
/// canonical form of the deepest existing ancestor.
fn canonical_location(path: &Path) -> Result<PathBuf> {
    let mut tail: Vec<&OsStr> = Vec::new();
    let mut current = path;

    loop {
        let (Some(name), Some(parent)) = (current.file_name(), current.parent()) else {
            return Ok(path.to_path_buf());
        };
        tail.push(name);
        current = parent;

        match fs::canonicalize(current) {
            Ok(mut base) => {
                base.extend(tail.iter().rev().copied());
                return Ok(base);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(Error::io(current, e)),
        }
    }
}

/// Remove whatever is at `path` without following links
///
/// Returns false if nothing was there.
fn remove_existing(path: &Path) -> Result<bool> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };

    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
    } else {
        // Directory links on Windows need remove_dir
        fs::remove_file(path)
            .or_else(|_| fs::remove_dir(path))
            .map_err(|e| Error::io(path, e))?;
    }
    Ok(true)
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
