//! MultiClip - Snapshot persistence
//!
//! Versioned JSON codec for the slot store, with atomic file replacement

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slots::{SlotEntry, SlotKey, SlotStore};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Persistence error type
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Snapshot exists but cannot be understood
    #[error("corrupt snapshot {path:?}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    /// Disk / filesystem failure
    #[error("snapshot I/O error: {0}")]
    Io(#[from] io::Error),
    /// Failed to encode the store as JSON
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// On-disk representation of the slot store at a point in time.
///
/// The version marker makes the format self-describing: an unknown version
/// or an unparseable document is reported as corruption instead of being
/// loaded as a partial store.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    saved_at: DateTime<Utc>,
    slots: BTreeMap<SlotKey, SlotEntry>,
}

/// Serialize `store` to `path`, atomically.
///
/// The snapshot is written to a sibling temporary file and renamed over the
/// destination, so a crash mid-write never leaves a half-written file as the
/// canonical one. Parent directories are created as needed.
pub fn write_snapshot(path: &Path, store: &SlotStore) -> Result<(), SnapshotError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        slots: store.all().map(|(k, e)| (k, e.clone())).collect(),
    };
    let json = serde_json::to_string_pretty(&snapshot).map_err(SnapshotError::Encode)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Atomic replace: temp file + rename
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Read a snapshot strictly: the file must exist and parse as the current
/// format.
///
/// `import` uses this directly, where a missing path is a command failure
/// rather than a first run.
pub fn read_snapshot(path: &Path) -> Result<SlotStore, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw).map_err(|e| SnapshotError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::Corrupt {
            path: path.to_path_buf(),
            reason: format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            ),
        });
    }
    Ok(SlotStore::from_slots(snapshot.slots))
}

/// Handle on the primary persisted snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Wrap the configured snapshot path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The underlying file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the full store (atomic replace)
    pub fn save(&self, store: &SlotStore) -> Result<(), SnapshotError> {
        write_snapshot(&self.path, store)
    }

    /// Load the persisted store.
    ///
    /// A missing file is a first run and yields an empty store; corruption
    /// and other I/O failures propagate for the caller's policy to sort out.
    pub fn load(&self) -> Result<SlotStore, SnapshotError> {
        match read_snapshot(&self.path) {
            Err(SnapshotError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(SlotStore::new())
            }
            other => other,
        }
    }
}
