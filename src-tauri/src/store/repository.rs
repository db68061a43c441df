//! Generic entity store
//!
//! One parametrized repository replaces the per-entity load/seed/save
//! code the admin area needs for every collection. Each record type
//! declares its slot name, an optional schema-version tag and a default
//! dataset; the store handles the rest uniformly:
//!
//! - first use seeds the slot with the default dataset
//! - an unreadable or version-mismatched slot is logged and re-seeded
//! - every mutation rewrites the full serialized list to its slot
//!
//! The in-memory list is the authoritative state; disk is committed
//! first so a failed write never leaves memory ahead of the slot.

use crate::error::Result;
use crate::storage::SlotStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A record persisted in its own named slot
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Slot name, e.g. "services"
    const SLOT: &'static str;

    /// Schema-version tag. When set, the slot is wrapped in a version
    /// envelope and a mismatch forces a re-seed.
    const VERSION: Option<&'static str> = None;

    /// The record minus its id
    type Draft;

    fn id(&self) -> &str;

    /// Build a full record from an id and a draft
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// Default dataset written on first use
    fn seed() -> Vec<Self>;
}

/// Records with a two-value status flag
pub trait Toggleable: Record {
    fn toggle_status(&mut self);
}

/// Envelope persisted for versioned slots
#[derive(Serialize, Deserialize)]
struct VersionedSlot<T> {
    version: String,
    records: Vec<T>,
}

#[derive(Serialize)]
struct VersionedSlotRef<'a, T> {
    version: &'static str,
    records: &'a [T],
}

/// Store for one entity collection, mirroring an in-memory list to its slot
#[derive(Clone)]
pub struct EntityStore<T: Record> {
    slots: SlotStore,
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> EntityStore<T> {
    /// Open the store: adopt the persisted list, or seed the defaults when
    /// the slot is absent, unreadable or carries a stale version tag.
    pub async fn open(slots: SlotStore) -> Result<Self> {
        let adopted = match slots.read(T::SLOT).await? {
            Some(raw) => match Self::decode(&raw) {
                Ok(records) => Some(records),
                Err(reason) => {
                    tracing::warn!("Slot {} unreadable ({}), restoring defaults", T::SLOT, reason);
                    None
                }
            },
            None => None,
        };

        let store = Self {
            slots,
            records: Arc::new(RwLock::new(Vec::new())),
        };

        match adopted {
            Some(records) => {
                *store.records.write().expect("store lock poisoned") = records;
            }
            None => {
                let defaults = T::seed();
                tracing::info!("Seeding slot {} with {} default records", T::SLOT, defaults.len());
                store.commit(defaults).await?;
            }
        }

        Ok(store)
    }

    /// Snapshot of the current list
    pub fn list(&self) -> Vec<T> {
        self.records.read().expect("store lock poisoned").clone()
    }

    /// Look up a single record by id
    pub fn get(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .expect("store lock poisoned")
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Append a new record built from the draft, with a fresh id
    pub async fn add(&self, draft: T::Draft) -> Result<T> {
        let record = T::from_draft(Uuid::new_v4().to_string(), draft);

        let mut updated = self.list();
        updated.push(record.clone());
        self.commit(updated).await?;

        tracing::debug!("Added record {} to slot {}", record.id(), T::SLOT);
        Ok(record)
    }

    /// Replace the record with the given id, keeping the id itself.
    /// Returns None (and leaves the list untouched) when no record matches.
    pub async fn update(&self, id: &str, draft: T::Draft) -> Result<Option<T>> {
        let mut updated = self.list();

        let Some(position) = updated.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };

        let record = T::from_draft(id.to_string(), draft);
        updated[position] = record.clone();
        self.commit(updated).await?;

        tracing::debug!("Updated record {} in slot {}", id, T::SLOT);
        Ok(Some(record))
    }

    /// Remove the record with the given id. Returns whether one existed.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let mut updated = self.list();
        let before = updated.len();
        updated.retain(|r| r.id() != id);

        if updated.len() == before {
            return Ok(false);
        }

        self.commit(updated).await?;

        tracing::debug!("Deleted record {} from slot {}", id, T::SLOT);
        Ok(true)
    }

    /// Apply an in-place edit to the record with the given id.
    /// Returns the edited record, or None when no record matches.
    pub async fn modify(&self, id: &str, edit: impl FnOnce(&mut T)) -> Result<Option<T>> {
        let mut updated = self.list();

        let Some(record) = updated.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };

        edit(record);
        let edited = record.clone();
        self.commit(updated).await?;

        Ok(Some(edited))
    }

    /// Flip the two-value status flag of the record with the given id
    pub async fn toggle(&self, id: &str) -> Result<Option<T>>
    where
        T: Toggleable,
    {
        let flipped = self.modify(id, |record| record.toggle_status()).await?;

        if let Some(record) = &flipped {
            tracing::debug!("Toggled record {} in slot {}", record.id(), T::SLOT);
        }

        Ok(flipped)
    }

    /// Persist the list to its slot, then adopt it as the in-memory state
    async fn commit(&self, records: Vec<T>) -> Result<()> {
        self.slots.write(T::SLOT, &Self::encode(&records)?).await?;
        *self.records.write().expect("store lock poisoned") = records;
        Ok(())
    }

    fn decode(raw: &str) -> std::result::Result<Vec<T>, String> {
        match T::VERSION {
            Some(expected) => {
                let envelope: VersionedSlot<T> =
                    serde_json::from_str(raw).map_err(|e| e.to_string())?;
                if envelope.version != expected {
                    return Err(format!(
                        "version tag {:?} does not match {:?}",
                        envelope.version, expected
                    ));
                }
                Ok(envelope.records)
            }
            None => serde_json::from_str(raw).map_err(|e| e.to_string()),
        }
    }

    fn encode(records: &[T]) -> Result<String> {
        let payload = match T::VERSION {
            Some(version) => serde_json::to_string(&VersionedSlotRef { version, records })?,
            None => serde_json::to_string(records)?,
        };
        Ok(payload)
    }
}
