//! Recursive copies that keep symlinks as symlinks

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::link;
use crate::error::{Error, Result};

/// Copy a file or directory tree from `source` to `dest`
///
/// `source` itself is followed if it is a symlink; links found inside the
/// tree are recreated with the same stored target. Permissions are carried
/// over. Returns the number of regular files copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    let meta = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    if !meta.is_dir() {
        fs::copy(source, dest).map_err(|e| Error::io(dest, e))?;
        return Ok(1);
    }

    let mut files = 0;
    // Applied after the walk so read-only directories can still be filled
    let mut dir_permissions: Vec<(PathBuf, fs::Permissions)> = Vec::new();

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(walk_error(source))?;
        let path = entry.path();
        let relative = path
            .strip_prefix(source)
            .map_err(|_| Error::InvalidSource {
                path: path.to_path_buf(),
                reason: "it lies outside the tree being copied",
            })?;
        let target = dest.join(relative);

        // The root is reported with its followed type, so test it first
        if entry.depth() == 0 {
            fs::create_dir(&target).map_err(|e| Error::io(&target, e))?;
            dir_permissions.push((target, meta.permissions()));
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            let stored = fs::read_link(path).map_err(|e| Error::io(path, e))?;
            let points_to_dir = fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false);
            link::create_symlink(&stored, &target, points_to_dir)
                .map_err(|e| Error::io(&target, e))?;
        } else if file_type.is_dir() {
            fs::create_dir(&target).map_err(|e| Error::io(&target, e))?;
            let permissions = entry
                .metadata()
                .map_err(walk_error(source))?
                .permissions();
            dir_permissions.push((target, permissions));
        } else {
            fs::copy(path, &target).map_err(|e| Error::io(&target, e))?;
            files += 1;
        }
    }

    for (dir, permissions) in dir_permissions.into_iter().rev() {
        fs::set_permissions(&dir, permissions).map_err(|e| Error::io(&dir, e))?;
    }

    Ok(files)
}

fn walk_error(root: &Path) -> impl Fn(walkdir::Error) -> Error + '_ {
    move |err| {
        let path = err.path().unwrap_or(root).to_path_buf();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
        Error::io(&path, source)
    }
}
