use std::fmt;
use std::path::Path;

use crate::classify::{FileTypeInfo, PermissionTriplet};
use crate::fetch::LinkTarget;
use crate::record::PathMetadata;
use crate::timefmt::FormattedTimestamps;

// Low bits of st_mode shown in the octal column (permissions plus
// setuid/setgid/sticky).
const MODE_ACCESS_MASK: u32 = 0o7777;

/// One path's fully resolved report, ready to render.
///
/// Borrows the outputs of the earlier pipeline stages; rendering is pure, so
/// the same inputs always produce byte-identical text.
#[derive(Debug)]
pub struct Report<'a> {
    pub path: &'a Path,
    pub meta: &'a PathMetadata,
    /// Present exactly when the classifier saw a symbolic link.
    pub link: Option<&'a LinkTarget>,
    pub owner: &'a str,
    pub group: &'a str,
    pub times: &'a FormattedTimestamps,
}

impl Report<'_> {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = self.meta;
        let kind = FileTypeInfo::from_mode(meta.mode);

        match self.link {
            Some(LinkTarget::Resolved(target)) => writeln!(
                f,
                "  File: `{}' -> `{}'",
                self.path.display(),
                target.display()
            )?,
            Some(LinkTarget::Unreadable) => writeln!(
                f,
                "  File: `{}' -> `<unable to read target>'",
                self.path.display()
            )?,
            None => writeln!(f, "  File: `{}'", self.path.display())?,
        }

        writeln!(
            f,
            "  Size: {:<10}\tBlocks: {:<10} IO Block: {} {}",
            meta.size, meta.blocks, meta.blksize, kind.name
        )?;

        write!(
            f,
            "Device: {:x}h/{}d Inode: {:<10} Links: {}",
            meta.dev, meta.dev, meta.ino, meta.nlink
        )?;
        if kind.is_device {
            writeln!(
                f,
                " Device type: {},{}",
                libc::major(meta.rdev),
                libc::minor(meta.rdev)
            )?;
        } else {
            writeln!(f)?;
        }

        writeln!(
            f,
            "Access: ({:04o}/{}{}{}{})  Uid: ({:>5}/{:>8})   Gid: ({:>5}/{:>8})",
            meta.mode & MODE_ACCESS_MASK,
            kind.code,
            PermissionTriplet::owner(meta.mode),
            PermissionTriplet::group(meta.mode),
            PermissionTriplet::other(meta.mode),
            meta.uid,
            self.owner,
            meta.gid,
            self.group
        )?;

        writeln!(f, "Access: {}", self.times.access)?;
        writeln!(f, "Modify: {}", self.times.modify)?;
        writeln!(f, "Change: {}", self.times.change)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
