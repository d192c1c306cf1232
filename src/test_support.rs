//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::action::{Event, update};
use crate::core::inventory::{InventoryStore, StorageError};
use crate::core::item::{Category, Item};
use crate::core::state::Session;

/// Five inactive items; "docker-mcp" sits at store index 1.
pub fn test_items() -> Vec<Item> {
    vec![
        Item::new("github-mcp", Category::Command).command("npx", &["-y", "github"]),
        Item::new("docker-mcp", Category::Command).command("docker", &["mcp"]),
        Item::new("context7", Category::Http).url("https://mcp.context7.com/mcp"),
        Item::new("filesystem-mcp", Category::Command).command("npx", &["fs"]),
        Item::new("postgres", Category::JsonConfig),
    ]
}

/// `item-000`, `item-001`, ... all inactive.
pub fn numbered_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(format!("item-{i:03}"), Category::Command))
        .collect()
}

/// A session over `test_items()` with no viewport yet.
pub fn test_session() -> Session {
    Session::new(test_items())
}

/// A session over `test_items()` that has seen one resize to `width` x 40.
pub fn sized_session(width: u16) -> Session {
    update(test_session(), Event::Resize { width, height: 40 }).0
}

/// A fresh directory under the system temp dir, unique per test name and
/// process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mcp-hub-test-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// In-memory store that can be told to fail.
#[derive(Default)]
pub struct MemoryStore {
    pub items: Mutex<Vec<Item>>,
    pub fail_saves: bool,
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Item>, StorageError> {
        Ok(self.items.lock().expect("store lock").clone())
    }

    async fn save(&self, items: Vec<Item>) -> Result<(), StorageError> {
        if self.fail_saves {
            return Err(StorageError::Io(std::io::Error::other("read-only store")));
        }
        *self.items.lock().expect("store lock") = items;
        Ok(())
    }
}
