//! MultiClip - User settings module
//!
//! Daemon configuration loaded from a JSON file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clipboard::DEFAULT_TIMEOUT_MS;
use crate::hotkeys::Modifier;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path of the persisted slot snapshot
    pub data_file: PathBuf,
    /// Modifier held to store the clipboard into a slot
    pub store_modifier: Modifier,
    /// Modifier held to recall a slot into the clipboard
    pub recall_modifier: Modifier,
    /// Deadline for a single clipboard operation (milliseconds)
    pub clipboard_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            store_modifier: Modifier::Ctrl,
            recall_modifier: Modifier::Alt,
            clipboard_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// Unknown or unreadable content falls back to defaults with a warning;
    /// a settings problem never stops the daemon.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    fn load_from(path: &Path) -> Self {
        let mut settings = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    log::warn!("Invalid settings file {:?}: {}, using defaults", path, e);
                    Settings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                log::warn!("Failed to read settings {:?}: {}, using defaults", path, e);
                Settings::default()
            }
        };
        settings.reconcile();
        settings
    }

    /// Write the settings file, creating parent directories
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&settings_path())
    }

    fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Clipboard deadline as a [`Duration`]
    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_millis(self.clipboard_timeout_ms)
    }

    /// Enforce cross-field rules that per-field deserialization cannot
    fn reconcile(&mut self) {
        if self.store_modifier == self.recall_modifier {
            log::warn!(
                "Store and recall modifiers are both {}, falling back to Ctrl/Alt",
                self.store_modifier
            );
            self.store_modifier = Modifier::Ctrl;
            self.recall_modifier = Modifier::Alt;
        }
        if self.clipboard_timeout_ms == 0 {
            log::warn!(
                "clipboard_timeout_ms of 0 is not usable, using {}",
                DEFAULT_TIMEOUT_MS
            );
            self.clipboard_timeout_ms = DEFAULT_TIMEOUT_MS;
        }
    }
}

/// Initialize settings: load them, writing the default file on first run
pub fn init_settings() -> Settings {
    let path = settings_path();
    let settings = Settings::load_from(&path);
    if !path.exists() {
        match settings.save_to(&path) {
            Ok(()) => log::info!("Created default settings at {:?}", path),
            Err(e) => log::warn!("Failed to write default settings: {}", e),
        }
    }
    settings
}

/// Location of the settings file
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("multiclip")
        .join("settings.json")
}

/// Default location of the slot snapshot
fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("multiclip")
        .join("slots.json")
}
