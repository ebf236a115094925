use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::record::PathMetadata;

/// Outcome of resolving a symbolic link's target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Resolved(PathBuf),
    Unreadable,
}

/// Fetch metadata for `path`.
///
/// `follow` selects between a stat-style lookup (symlinks followed) and an
/// lstat-style one; the caller fixes the choice once for the whole run.
/// Errors keep the OS errno so the caller can surface it as exit status.
pub fn fetch(path: &Path, follow: bool) -> io::Result<PathMetadata> {
    let md = if follow {
        fs::metadata(path)?
    } else {
        fs::symlink_metadata(path)?
    };
    Ok(PathMetadata::from(&md))
}

/// Read a symlink's target. Failure is non-fatal; the report substitutes a
/// placeholder instead.
pub fn read_target(path: &Path) -> LinkTarget {
    match fs::read_link(path) {
        Ok(target) => LinkTarget::Resolved(target),
        Err(e) => {
            debug!("[fetch] read_link({}) failed: {e}", path.display());
            LinkTarget::Unreadable
        }
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
