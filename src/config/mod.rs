//! MultiClip - Config module
//!
//! User settings persistence

pub mod settings;

pub use settings::{init_settings, settings_path, Settings};
