//! CLI commands for the `aip-check` binary

pub mod args;
pub mod check;
pub mod list;

pub use args::{Cli, Command};

/// Exit code for a clean run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when annotations were emitted
pub const EXIT_ANNOTATIONS: i32 = 1;
/// Exit code for build, request, or handler errors
pub const EXIT_ERROR: i32 = 2;
