//! MultiClip - Storage module
//!
//! Versioned slot snapshots on disk

pub mod snapshot;

pub use snapshot::{read_snapshot, write_snapshot, SnapshotError, SnapshotFile, SNAPSHOT_VERSION};
