//! MultiClip - CLI command handlers
//!
//! Offline subcommands operating on the persisted snapshot

use std::error::Error;
use std::path::Path;

use crate::slots::{SlotKey, SlotStore};
use crate::storage::{read_snapshot, write_snapshot, SnapshotFile};

/// Width of the content preview in `list` output
const LIST_PREVIEW_CHARS: usize = 40;

/// Print every stored slot as `K: preview`, sorted by key
pub fn run_list(data_file: &Path) -> Result<(), Box<dyn Error>> {
    let store = SnapshotFile::new(data_file.to_path_buf()).load()?;
    if store.is_empty() {
        println!("No slots yet.");
        return Ok(());
    }
    for (key, entry) in store.all() {
        println!("{}: {}", key, entry.preview(LIST_PREVIEW_CHARS));
    }
    Ok(())
}

/// Remove one slot from the snapshot
pub fn run_clear(data_file: &Path, slot: char) -> Result<(), Box<dyn Error>> {
    let key = SlotKey::new(slot)?;
    let file = SnapshotFile::new(data_file.to_path_buf());
    let mut store = file.load()?;
    match store.clear_slot(key) {
        Some(_) => {
            file.save(&store)?;
            println!("Cleared slot {}", key);
        }
        None => println!("Slot not found"),
    }
    Ok(())
}

/// Write the current snapshot to `path`, in the same format as the snapshot
/// file itself
pub fn run_export(data_file: &Path, path: &Path) -> Result<(), Box<dyn Error>> {
    let store = SnapshotFile::new(data_file.to_path_buf()).load()?;
    write_snapshot(path, &store)?;
    println!("Exported successfully");
    Ok(())
}

/// Replace the whole snapshot with the contents of `path`.
///
/// The input is validated before anything is written, so a malformed file
/// leaves the live snapshot untouched. A running daemon keeps its in-memory
/// slots until restarted.
pub fn run_import(data_file: &Path, path: &Path) -> Result<(), Box<dyn Error>> {
    let incoming = read_snapshot(path)?;
    let file = SnapshotFile::new(data_file.to_path_buf());
    let mut store = match file.load() {
        Ok(store) => store,
        Err(e) => {
            // The primary file's own state cannot block a full replacement
            log::warn!("Replacing unreadable snapshot: {}", e);
            SlotStore::new()
        }
    };
    store.replace_all(incoming);
    file.save(&store)?;
    println!("Imported successfully");
    Ok(())
}
