//! Exit codes for the `bodyguard` binary.
//! `scan` callers (CI hooks, shell pipelines) branch on these; keep them stable.

pub const SUCCESS: i32 = 0; // Accepted, or server shut down cleanly
pub const INTERNAL_ERROR: i32 = 2; // I/O, bind or setup failure
pub const REJECTED: i32 = 3; // is_malicious found
