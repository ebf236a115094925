mod classify;
mod fetch;
mod identity;
mod record;
mod report;
mod timefmt;

pub use classify::{FileTypeInfo, PermissionTriplet};
pub use fetch::{LinkTarget, fetch, read_target};
pub use identity::{UNKNOWN_LABEL, group_name, user_name};
pub use record::PathMetadata;
pub use report::Report;
pub use timefmt::FormattedTimestamps;
