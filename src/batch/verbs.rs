//! Status words printed in front of progress messages

pub const USING: &str = "Using";
pub const RENAMING: &str = "Renaming";
pub const RENAMED: &str = "Renamed";
pub const FAILED: &str = "Failed";
pub const DONE: &str = "Done";
