//! Showcase service
//!
//! Partners and the realization gallery. Realizations reference the
//! service that was performed; the reference is resolved at read time
//! through the services store.

use super::ensure_image_fits;
use crate::config;
use crate::error::Result;
use crate::store::{
    EntityStatus, EntityStore, Partner, PartnerDraft, Realization, RealizationDraft, Service,
};
use serde::Serialize;

/// A realization joined with the name of the service it showcases
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizationView {
    #[serde(flatten)]
    pub realization: Realization,
    /// Resolved service name, or the unknown label when the service was
    /// deleted out from under the realization
    pub service_name: String,
}

/// Service for managing partners and realizations
#[derive(Clone)]
pub struct ShowcaseService {
    partners: EntityStore<Partner>,
    realizations: EntityStore<Realization>,
    services: EntityStore<Service>,
}

impl ShowcaseService {
    pub fn new(
        partners: EntityStore<Partner>,
        realizations: EntityStore<Realization>,
        services: EntityStore<Service>,
    ) -> Self {
        Self {
            partners,
            realizations,
            services,
        }
    }

    // ===== Partners =====

    pub fn list_partners(&self) -> Vec<Partner> {
        self.partners.list()
    }

    /// List active partners only (public partner strip)
    pub fn active_partners(&self) -> Vec<Partner> {
        self.partners
            .list()
            .into_iter()
            .filter(|p| p.status == EntityStatus::Active)
            .collect()
    }

    /// Create a new partner
    pub async fn create_partner(&self, draft: PartnerDraft) -> Result<Partner> {
        tracing::info!("Creating partner: {}", draft.name);

        ensure_image_fits(draft.logo.as_deref())?;

        let partner = self.partners.add(draft).await?;

        tracing::info!("Partner created: {}", partner.id);
        Ok(partner)
    }

    /// Replace a partner
    pub async fn update_partner(&self, id: &str, draft: PartnerDraft) -> Result<Option<Partner>> {
        ensure_image_fits(draft.logo.as_deref())?;
        self.partners.update(id, draft).await
    }

    /// Delete a partner
    pub async fn delete_partner(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting partner: {}", id);
        self.partners.delete(id).await
    }

    /// Flip a partner between active and inactive
    pub async fn toggle_partner(&self, id: &str) -> Result<Option<Partner>> {
        self.partners.toggle(id).await
    }

    // ===== Realizations =====

    pub fn list_realizations(&self) -> Vec<Realization> {
        self.realizations.list()
    }

    /// List all realizations with their service names resolved
    pub fn realization_views(&self) -> Vec<RealizationView> {
        self.realizations
            .list()
            .into_iter()
            .map(|realization| {
                let service_name = self
                    .services
                    .get(&realization.service_id)
                    .map(|s| s.name)
                    .unwrap_or_else(|| config::UNKNOWN_LABEL.to_string());
                RealizationView {
                    realization,
                    service_name,
                }
            })
            .collect()
    }

    /// Create a new realization
    pub async fn create_realization(&self, draft: RealizationDraft) -> Result<Realization> {
        tracing::info!("Creating realization for service: {}", draft.service_id);

        ensure_image_fits(Some(&draft.image))?;

        self.realizations.add(draft).await
    }

    /// Replace a realization
    pub async fn update_realization(
        &self,
        id: &str,
        draft: RealizationDraft,
    ) -> Result<Option<Realization>> {
        ensure_image_fits(Some(&draft.image))?;
        self.realizations.update(id, draft).await
    }

    /// Delete a realization
    pub async fn delete_realization(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting realization: {}", id);
        self.realizations.delete(id).await
    }
}
