//! Visit tracker
//!
//! Fires one best-effort HTTP hit to an external visit counter the
//! first time the app is opened. The "visited" slot is the one-shot
//! flag; it is written whether or not the counter could be reached, so
//! the call never repeats.

use crate::config;
use crate::error::Result;
use crate::storage::SlotStore;
use anyhow::Context;
use std::time::Duration;

const VISITED_SLOT: &str = "visited";

/// Service recording the first visit
#[derive(Clone)]
pub struct VisitTracker {
    slots: SlotStore,
    counter_url: String,
}

impl VisitTracker {
    pub fn new(slots: SlotStore) -> Self {
        Self::with_endpoint(slots, config::VISIT_COUNTER_URL.to_string())
    }

    pub fn with_endpoint(slots: SlotStore, counter_url: String) -> Self {
        Self { slots, counter_url }
    }

    /// Record a visit. Returns true only the first time; the remote
    /// counter failing is logged and otherwise ignored.
    pub async fn record_visit(&self) -> Result<bool> {
        if self.slots.read(VISITED_SLOT).await?.is_some() {
            return Ok(false);
        }

        if let Err(e) = self.bump_remote_counter().await {
            tracing::warn!("Visit counter unreachable: {:#}", e);
        }

        self.slots.write(VISITED_SLOT, "true").await?;

        tracing::info!("First visit recorded");
        Ok(true)
    }

    async fn bump_remote_counter(&self) -> anyhow::Result<()> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .context("building HTTP client")?;

        client
            .get(&self.counter_url)
            .send()
            .await
            .context("visit counter request failed")?
            .error_for_status()
            .context("visit counter returned an error status")?;

        Ok(())
    }
}
