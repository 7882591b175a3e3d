//! Symbolic link creation
//!
//! Links whose source and location both live under the home directory store
//! a relative target, so they survive the home directory moving (external
//! drives, a different user name after a restore). Everything else gets an
//! absolute target.

use std::io;
use std::path::{Path, PathBuf};

/// Compute the target to store in a link placed at `link` pointing at `source`
///
/// Both paths must be absolute.
pub fn link_target(source: &Path, link: &Path, home: &Path) -> PathBuf {
    if source.starts_with(home) && link.starts_with(home) {
        if let Some(relative) = link.parent().and_then(|dir| pathdiff::diff_paths(source, dir)) {
            return relative;
        }
    }
    source.to_path_buf()
}

/// Create a symbolic link at `link` storing `target`
///
/// `target_is_dir` only matters on Windows, where file and directory links
/// are distinct.
#[cfg(unix)]
pub fn create_symlink(target: &Path, link: &Path, _target_is_dir: bool) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
pub fn create_symlink(target: &Path, link: &Path, target_is_dir: bool) -> io::Result<()> {
    if target_is_dir {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_relative_inside_home() {
        let target = link_target(
            Path::new("/Users/me/projects/foo"),
            Path::new("/Users/me/Library/Application Support/automator_util/proj/foo"),
            Path::new("/Users/me"),
        );
        assert_eq!(target, PathBuf::from("../../../../projects/foo"));
    }

    #[test]
    fn test_target_absolute_outside_home() {
        let target = link_target(
            Path::new("/opt/tools/foo"),
            Path::new("/Users/me/Library/Application Support/automator_util/proj/foo"),
            Path::new("/Users/me"),
        );
        assert_eq!(target, PathBuf::from("/opt/tools/foo"));
    }

    #[test]
    fn test_target_absolute_when_link_outside_home() {
        let target = link_target(
            Path::new("/Users/me/projects/foo"),
            Path::new("/Library/Application Support/automator_util/proj/foo"),
            Path::new("/Users/me"),
        );
        assert_eq!(target, PathBuf::from("/Users/me/projects/foo"));
    }

    #[test]
    fn test_home_prefix_is_component_wise() {
        // "/Users/meg" is not inside "/Users/me"
        let target = link_target(
            Path::new("/Users/meg/foo"),
            Path::new("/Users/me/support/foo"),
            Path::new("/Users/me"),
        );
        assert_eq!(target, PathBuf::from("/Users/meg/foo"));
    }

    #[cfg(unix)]
    #[test]
    fn test_create_symlink_resolves_back() {
        let dir = tempfile::tempdir().unwrap();
        let home = dir.path();
        let source = home.join("projects").join("foo");
        std::fs::create_dir_all(&source).unwrap();
        let link_dir = home.join("support").join("proj");
        std::fs::create_dir_all(&link_dir).unwrap();
        let link = link_dir.join("foo");

        let target = link_target(&source, &link, home);
        assert!(target.is_relative());
        create_symlink(&target, &link, true).unwrap();

        assert_eq!(std::fs::read_link(&link).unwrap(), target);
        assert_eq!(
            link.canonicalize().unwrap(),
            source.canonicalize().unwrap()
        );
    }
}
