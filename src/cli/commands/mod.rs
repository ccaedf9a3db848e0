//! CLI command implementations
//!
//! Every command returns its process exit code.

pub mod init;
pub mod inspect;
pub mod replace;
pub mod validate;

/// Exit code: every document succeeded
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code: some documents failed or did not verify
pub const EXIT_PARTIAL: i32 = 1;

/// Exit code: invalid configuration or arguments
pub const EXIT_CONFIG: i32 = 2;

/// Exit code: the run could not start or aborted
pub const EXIT_FATAL: i32 = 5;

/// Exit code: interrupted by SIGINT or SIGTERM
pub const EXIT_INTERRUPTED: i32 = 130;
