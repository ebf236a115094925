use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

/// Raw per-path metadata as reported by the OS.
///
/// Built once per path operand and dropped after that path's report is
/// printed. Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMetadata {
    pub dev: u64,
    pub ino: u64,
    /// Combined file-type and permission bits (st_mode).
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    /// Device identifier for character/block device nodes.
    pub rdev: u64,
    pub size: u64,
    /// Preferred I/O block size.
    pub blksize: u64,
    /// Number of 512-byte blocks allocated.
    pub blocks: u64,
    pub atime_secs: i64,
    pub mtime_secs: i64,
    pub ctime_secs: i64,
}

impl From<&Metadata> for PathMetadata {
    fn from(md: &Metadata) -> Self {
        Self {
            dev: md.dev(),
            ino: md.ino(),
            mode: md.mode(),
            nlink: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            rdev: md.rdev(),
            size: md.size(),
            blksize: md.blksize(),
            blocks: md.blocks(),
            atime_secs: md.atime(),
            mtime_secs: md.mtime(),
            ctime_secs: md.ctime(),
        }
    }
}
