//! Named JSON document slots
//!
//! Each slot is a single JSON file under the store root, e.g. the
//! "services" slot lives at "store/services.json". A slot holds the full
//! serialized state for one entity collection (or one settings singleton),
//! and every write replaces the whole document.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// File-backed key-value store for JSON documents
#[derive(Clone)]
pub struct SlotStore {
    root: PathBuf,
}

impl SlotStore {
    /// Create a slot store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the root directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("Slot store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Read a slot's document, or None if the slot has never been written
    pub async fn read(&self, slot: &str) -> Result<Option<String>> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;

        tracing::debug!("Read slot: {} ({} bytes)", slot, contents.len());

        Ok(Some(contents))
    }

    /// Write a slot's document, replacing any previous contents
    pub async fn write(&self, slot: &str, contents: &str) -> Result<()> {
        let path = self.slot_path(slot);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.sync_all().await?;

        // Rename to final location
        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote slot: {} ({} bytes)", slot, contents.len());

        Ok(())
    }

    /// Remove a slot entirely; no-op if it was never written
    pub async fn remove(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot);

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).await?;

        tracing::debug!("Removed slot: {}", slot);

        Ok(())
    }

    /// Check whether a slot exists on disk
    pub async fn exists(&self, slot: &str) -> Result<bool> {
        Ok(self.slot_path(slot).exists())
    }

    /// Get the file path backing a slot
    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{}.json", slot))
    }

    /// Get the store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (SlotStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path().join("store"));
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_read_missing_slot() {
        let (store, _temp) = create_test_store().await;

        let contents = store.read("services").await.unwrap();
        assert!(contents.is_none());
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let (store, _temp) = create_test_store().await;

        store.write("services", r#"[{"id":"1"}]"#).await.unwrap();

        let contents = store.read("services").await.unwrap();
        assert_eq!(contents.as_deref(), Some(r#"[{"id":"1"}]"#));
    }

    #[tokio::test]
    async fn test_write_replaces_previous_contents() {
        let (store, _temp) = create_test_store().await;

        store.write("news", "[]").await.unwrap();
        store.write("news", r#"[{"id":"a"}]"#).await.unwrap();

        let contents = store.read("news").await.unwrap();
        assert_eq!(contents.as_deref(), Some(r#"[{"id":"a"}]"#));
    }

    #[tokio::test]
    async fn test_slots_are_independent() {
        let (store, _temp) = create_test_store().await;

        store.write("partners", "[1]").await.unwrap();
        store.write("products", "[2]").await.unwrap();

        assert_eq!(store.read("partners").await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.read("products").await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_remove() {
        let (store, _temp) = create_test_store().await;

        store.write("visited", "true").await.unwrap();
        assert!(store.exists("visited").await.unwrap());

        store.remove("visited").await.unwrap();
        assert!(!store.exists("visited").await.unwrap());

        // Removing again is a no-op
        store.remove("visited").await.unwrap();
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let (store, _temp) = create_test_store().await;

        store.write("categories", "[]").await.unwrap();

        let leftover = store.root().join("categories.json.tmp");
        assert!(!leftover.exists());
    }
}
