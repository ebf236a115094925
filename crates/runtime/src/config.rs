pub const PROGRAM_NAME: &str = "pathstat";

/// Environment variable controlling the stderr logger's level.
pub const PROGRAM_LOG_LEVEL: &str = "PATHSTAT_LOG_LEVEL";
