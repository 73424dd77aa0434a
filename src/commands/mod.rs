//! MultiClip - Commands module
//!
//! CLI subcommands that work on the snapshot without the daemon

pub mod handlers;

pub use handlers::{run_clear, run_export, run_import, run_list};
