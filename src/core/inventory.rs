//! # Inventory Persistence
//!
//! Loads and saves the item store. The reducer never calls this; the TUI
//! host does, on a background task, and feeds the outcome back in as a
//! `PersistResult` event.
//!
//! On disk the inventory is a single JSON document:
//!
//! ```text
//! { "version": "1.0", "timestamp": "<RFC 3339>", "inventory": [ ...items ] }
//! ```
//!
//! Writes go to `<file>.tmp` first and are renamed into place. One write
//! at a time per store; a snapshot taken before one already on disk is
//! dropped rather than written over it.
//!
//! `open_session()` is the startup path: load, seed if empty, fall back to
//! the built-in set if the file cannot be read.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::core::item::{Item, default_items};
use crate::core::state::{Notification, Session};

pub const INVENTORY_VERSION: &str = "1.0";
/// Anything bigger is not an inventory we wrote.
pub const MAX_INVENTORY_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Parse(serde_json::Error),
    Encode(serde_json::Error),
    TooLarge(u64),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "inventory I/O error: {e}"),
            StorageError::Parse(e) => write!(f, "inventory parse error: {e}"),
            StorageError::Encode(e) => write!(f, "inventory encode error: {e}"),
            StorageError::TooLarge(size) => {
                write!(f, "inventory file is {size} bytes (limit {MAX_INVENTORY_BYTES})")
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryFile {
    pub version: String,
    pub timestamp: String,
    #[serde(default)]
    pub inventory: Vec<Item>,
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Read the whole inventory. A store that has never been written is
    /// empty, not an error.
    async fn load(&self) -> Result<Vec<Item>, StorageError>;

    /// Replace the stored inventory with `items`.
    async fn save(&self, items: Vec<Item>) -> Result<(), StorageError>;
}

/// JSON file on local disk.
pub struct JsonFileStore {
    path: PathBuf,
    /// Ticket handed to each save when it is first polled.
    next_generation: AtomicU64,
    /// Held across write and rename; guards the newest generation on disk.
    written: Mutex<u64>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            next_generation: AtomicU64::new(0),
            written: Mutex::new(0),
        }
    }
}

#[async_trait]
impl InventoryStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Item>, StorageError> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No inventory at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a regular file", self.path.display()),
            )));
        }
        if metadata.len() > MAX_INVENTORY_BYTES {
            return Err(StorageError::TooLarge(metadata.len()));
        }

        let json = tokio::fs::read_to_string(&self.path).await?;
        let file: InventoryFile = serde_json::from_str(&json).map_err(StorageError::Parse)?;
        info!(
            "Loaded {} items from {} (format {})",
            file.inventory.len(),
            self.path.display(),
            file.version
        );
        Ok(file.inventory)
    }

    async fn save(&self, items: Vec<Item>) -> Result<(), StorageError> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut written = self.written.lock().await;
        if generation < *written {
            debug!(
                "Dropping save {} for {}, {} is already on disk",
                generation,
                self.path.display(),
                *written
            );
            return Ok(());
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let file = InventoryFile {
            version: INVENTORY_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            inventory: items,
        };
        let json = serde_json::to_string_pretty(&file).map_err(StorageError::Encode)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }
        *written = generation;
        debug!("Saved {} items to {}", file.inventory.len(), self.path.display());
        Ok(())
    }
}

/// Build the startup session from whatever the store holds.
///
/// An empty store is seeded with the built-in set when `seed_defaults` is on.
/// A store that cannot be read falls back to the built-in set and says so.
pub async fn open_session(store: &dyn InventoryStore, seed_defaults: bool) -> Session {
    match store.load().await {
        Ok(items) if !items.is_empty() => Session::new(items),
        Ok(_) if seed_defaults => {
            let items = default_items();
            info!("Inventory empty, seeding {} default MCPs", items.len());
            if let Err(e) = store.save(items.clone()).await {
                warn!("Failed to write seeded inventory: {}", e);
            }
            Session::new(items)
        }
        Ok(items) => Session::new(items),
        Err(e) => {
            error!("Failed to load inventory: {}", e);
            Session::new(default_items())
                .with_notification(Notification::error(format!("Could not load inventory: {e}")))
        }
    }
}
