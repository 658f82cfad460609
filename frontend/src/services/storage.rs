//! `KeyValueStore` over the browser's Web Storage areas.

use anyhow::{anyhow, Result};
use gloo::storage::{LocalStorage, SessionStorage, Storage};
use master_tailor_backend::backend::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives reloads and browser restarts; holds designs and bookings
    Local,
    /// Cleared when the tab's session ends; holds the admin flag
    Session,
}

/// Raw string access to `localStorage` / `sessionStorage`
///
/// Values are stored verbatim. gloo's typed `get`/`set` would JSON-encode
/// them, which breaks compatibility with data the pages already wrote.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn raw(&self) -> web_sys::Storage {
        match self.area {
            StorageArea::Local => LocalStorage::raw(),
            StorageArea::Session => SessionStorage::raw(),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.raw()
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read '{}' from {:?} storage: {:?}", key, self.area, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write '{}' to {:?} storage: {:?}", key, self.area, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.raw()
            .remove_item(key)
            .map_err(|e| anyhow!("Failed to remove '{}' from {:?} storage: {:?}", key, self.area, e))
    }
}
