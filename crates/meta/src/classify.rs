use std::fmt;

// mode_t differs in width across platforms; normalize everything to u32,
// which is what std's MetadataExt::mode() hands back.
const S_IFMT: u32 = libc::S_IFMT as u32;
const S_IFIFO: u32 = libc::S_IFIFO as u32;
const S_IFCHR: u32 = libc::S_IFCHR as u32;
const S_IFDIR: u32 = libc::S_IFDIR as u32;
const S_IFBLK: u32 = libc::S_IFBLK as u32;
const S_IFREG: u32 = libc::S_IFREG as u32;
const S_IFLNK: u32 = libc::S_IFLNK as u32;
const S_IFSOCK: u32 = libc::S_IFSOCK as u32;

// Solaris-only node types; libc does not expose these for other targets.
#[cfg(any(target_os = "solaris", target_os = "illumos"))]
const S_IFDOOR: u32 = 0o150000;
#[cfg(any(target_os = "solaris", target_os = "illumos"))]
const S_IFPORT: u32 = 0o160000;

const S_ISUID: u32 = libc::S_ISUID as u32;
const S_ISGID: u32 = libc::S_ISGID as u32;
const S_IRUSR: u32 = libc::S_IRUSR as u32;
const S_IWUSR: u32 = libc::S_IWUSR as u32;
const S_IXUSR: u32 = libc::S_IXUSR as u32;
const S_IRGRP: u32 = libc::S_IRGRP as u32;
const S_IWGRP: u32 = libc::S_IWGRP as u32;
const S_IXGRP: u32 = libc::S_IXGRP as u32;
const S_IROTH: u32 = libc::S_IROTH as u32;
const S_IWOTH: u32 = libc::S_IWOTH as u32;
const S_IXOTH: u32 = libc::S_IXOTH as u32;

/// Derived view of the type bits of an st_mode value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeInfo {
    /// Symbolic name, e.g. "directory".
    pub name: &'static str,
    /// Single-character code used in the mode column, e.g. 'd'.
    pub code: char,
    /// True exactly for character and block devices.
    pub is_device: bool,
    /// True exactly for symbolic links.
    pub is_symlink: bool,
}

impl FileTypeInfo {
    pub fn from_mode(mode: u32) -> Self {
        let (name, code) = match mode & S_IFMT {
            S_IFIFO => ("named fifo", 'p'),
            S_IFCHR => ("character device", 'c'),
            S_IFDIR => ("directory", 'd'),
            S_IFBLK => ("block device", 'b'),
            S_IFREG => ("regular file", '-'),
            S_IFLNK => ("symbolic link", 'l'),
            S_IFSOCK => ("socket", 's'),
            #[cfg(any(target_os = "solaris", target_os = "illumos"))]
            S_IFDOOR => ("door", 'D'),
            #[cfg(any(target_os = "solaris", target_os = "illumos"))]
            S_IFPORT => ("event port", 'P'),
            _ => ("<unknown>", '?'),
        };

        let kind = mode & S_IFMT;
        Self {
            name,
            code,
            is_device: kind == S_IFCHR || kind == S_IFBLK,
            is_symlink: kind == S_IFLNK,
        }
    }
}

/// One rwx permission column (owner, group, or other) of the mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionTriplet([char; 3]);

impl PermissionTriplet {
    pub fn owner(mode: u32) -> Self {
        Self::build(mode, S_IRUSR, S_IWUSR, S_IXUSR, Some(S_ISUID))
    }

    pub fn group(mode: u32) -> Self {
        Self::build(mode, S_IRGRP, S_IWGRP, S_IXGRP, Some(S_ISGID))
    }

    /// The "other" column carries no special-bit overlay: the sticky bit is
    /// not rendered here (known gap, kept for output compatibility).
    pub fn other(mode: u32) -> Self {
        Self::build(mode, S_IROTH, S_IWOTH, S_IXOTH, None)
    }

    fn build(mode: u32, read: u32, write: u32, exec: u32, special: Option<u32>) -> Self {
        let r = if mode & read != 0 { 'r' } else { '-' };
        let w = if mode & write != 0 { 'w' } else { '-' };
        let x = mode & exec != 0;
        let last = match special {
            Some(bit) if mode & bit != 0 => {
                if x {
                    's'
                } else {
                    'S'
                }
            }
            _ if x => 'x',
            _ => '-',
        };
        Self([r, w, last])
    }
}

impl fmt::Display for PermissionTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
