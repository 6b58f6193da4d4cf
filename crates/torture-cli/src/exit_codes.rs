//! Exit codes for the `torture` binary.
//! Without `--strict` a completed run always exits with SUCCESS.

pub const SUCCESS: i32 = 0;
pub const CASE_FAILED: i32 = 1; // --strict and at least one case did not pass
pub const CONFIG_ERROR: i32 = 2; // Bad flags, unreadable baseline, unknown case name
