//! Catalog service
//!
//! High-level business logic for the service catalog: salon services and
//! their categories. Enforces the name-uniqueness invariant and resolves
//! the soft service → category references for display.

use super::{ensure_image_fits, ensure_unique_name};
use crate::config;
use crate::error::Result;
use crate::store::{
    Category, CategoryDraft, EntityStore, EntityStatus, Service, ServiceDraft,
};
use serde::Serialize;

/// A service joined with its resolved category name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    #[serde(flatten)]
    pub service: Service,
    /// Resolved category name, or the unknown-reference label when the
    /// category id no longer exists
    pub category_name: String,
}

/// Service for managing the salon catalog
#[derive(Clone)]
pub struct CatalogService {
    services: EntityStore<Service>,
    categories: EntityStore<Category>,
}

impl CatalogService {
    pub fn new(services: EntityStore<Service>, categories: EntityStore<Category>) -> Self {
        Self {
            services,
            categories,
        }
    }

    // ===== Services =====

    /// List all services, active or not
    pub fn list_services(&self) -> Vec<Service> {
        self.services.list()
    }

    /// List active services only (public site)
    pub fn active_services(&self) -> Vec<Service> {
        self.services
            .list()
            .into_iter()
            .filter(|s| s.status == EntityStatus::Active)
            .collect()
    }

    /// List active services belonging to a category (per-category page)
    pub fn services_in_category(&self, category_id: &str) -> Vec<Service> {
        self.active_services()
            .into_iter()
            .filter(|s| s.category == category_id)
            .collect()
    }

    /// List all services with their category names resolved
    pub fn service_views(&self) -> Vec<ServiceView> {
        self.services
            .list()
            .into_iter()
            .map(|service| {
                let category_name = self.category_name(&service.category);
                ServiceView {
                    service,
                    category_name,
                }
            })
            .collect()
    }

    /// Create a new service
    pub async fn create_service(&self, draft: ServiceDraft) -> Result<Service> {
        tracing::info!("Creating service: {}", draft.name);

        self.ensure_service_name_free(&draft.name, None)?;
        ensure_image_fits(draft.image.as_deref())?;

        let service = self.services.add(draft).await?;

        tracing::info!("Service created: {}", service.id);
        Ok(service)
    }

    /// Replace a service; silently leaves the list unchanged when the id
    /// does not exist
    pub async fn update_service(&self, id: &str, draft: ServiceDraft) -> Result<Option<Service>> {
        tracing::debug!("Updating service: {}", id);

        self.ensure_service_name_free(&draft.name, Some(id))?;
        ensure_image_fits(draft.image.as_deref())?;

        self.services.update(id, draft).await
    }

    /// Delete a service. Realizations referencing it are left dangling;
    /// their views fall back to the unknown label.
    pub async fn delete_service(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting service: {}", id);
        self.services.delete(id).await
    }

    /// Flip a service between active and inactive
    pub async fn toggle_service(&self, id: &str) -> Result<Option<Service>> {
        self.services.toggle(id).await
    }

    fn ensure_service_name_free(&self, name: &str, exclude_id: Option<&str>) -> Result<()> {
        let services = self.services.list();
        ensure_unique_name(
            services.iter().map(|s| (s.id.as_str(), s.name.as_str())),
            name,
            exclude_id,
        )
    }

    // ===== Categories =====

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.list()
    }

    /// List active categories only (public navigation)
    pub fn active_categories(&self) -> Vec<Category> {
        self.categories
            .list()
            .into_iter()
            .filter(|c| c.status == EntityStatus::Active)
            .collect()
    }

    /// Create a new category
    pub async fn create_category(&self, draft: CategoryDraft) -> Result<Category> {
        tracing::info!("Creating category: {}", draft.name);

        self.ensure_category_name_free(&draft.name, None)?;
        ensure_image_fits(draft.image.as_deref())?;

        let category = self.categories.add(draft).await?;

        tracing::info!("Category created: {}", category.id);
        Ok(category)
    }

    /// Replace a category
    pub async fn update_category(
        &self,
        id: &str,
        draft: CategoryDraft,
    ) -> Result<Option<Category>> {
        tracing::debug!("Updating category: {}", id);

        self.ensure_category_name_free(&draft.name, Some(id))?;
        ensure_image_fits(draft.image.as_deref())?;

        self.categories.update(id, draft).await
    }

    /// Delete a category. Services referencing it keep their dangling
    /// category id (no cascade).
    pub async fn delete_category(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting category: {}", id);
        self.categories.delete(id).await
    }

    /// Flip a category between active and inactive
    pub async fn toggle_category(&self, id: &str) -> Result<Option<Category>> {
        self.categories.toggle(id).await
    }

    /// Resolve a category id to its name, falling back to the designated
    /// unknown label for dangling references
    pub fn category_name(&self, category_id: &str) -> String {
        self.categories
            .get(category_id)
            .map(|c| c.name)
            .unwrap_or_else(|| config::UNKNOWN_LABEL.to_string())
    }

    fn ensure_category_name_free(&self, name: &str, exclude_id: Option<&str>) -> Result<()> {
        let categories = self.categories.list();
        ensure_unique_name(
            categories.iter().map(|c| (c.id.as_str(), c.name.as_str())),
            name,
            exclude_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::storage::SlotStore;
    use tempfile::TempDir;

    async fn create_test_service() -> (CatalogService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path().join("store"));
        slots.initialize().await.unwrap();

        let services = EntityStore::open(slots.clone()).await.unwrap();
        let categories = EntityStore::open(slots).await.unwrap();

        (CatalogService::new(services, categories), temp_dir)
    }

    fn service_draft(name: &str, category: &str) -> ServiceDraft {
        ServiceDraft {
            name: name.to_string(),
            description: "Test".to_string(),
            category: category.to_string(),
            duration: "30 min".to_string(),
            price: "20 €".to_string(),
            included: vec![],
            excluded: vec![],
            status: EntityStatus::Active,
            image: None,
            variants: vec![],
        }
    }

    #[tokio::test]
    async fn test_duplicate_service_name_is_rejected() {
        let (catalog, _temp) = create_test_service().await;

        // "Manucure" is part of the seeded catalog
        let before = catalog.list_services();
        let result = catalog
            .create_service(service_draft("manucure ", "cat-onglerie"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateName(_))));
        assert_eq!(catalog.list_services().len(), before.len());
    }

    #[tokio::test]
    async fn test_update_keeps_own_name() {
        let (catalog, _temp) = create_test_service().await;

        let created = catalog
            .create_service(service_draft("Brushing", "cat-coiffure"))
            .await
            .unwrap();

        // Re-submitting the same name for the same record is not a duplicate
        let updated = catalog
            .update_service(&created.id, service_draft("Brushing", "cat-coiffure"))
            .await
            .unwrap();

        assert!(updated.is_some());
    }

    #[tokio::test]
    async fn test_active_services_filter() {
        let (catalog, _temp) = create_test_service().await;

        let all = catalog.list_services();
        let active = catalog.active_services();

        // The seeded catalog contains one inactive service
        assert!(active.len() < all.len());
        assert!(active.iter().all(|s| s.status == EntityStatus::Active));
    }

    #[tokio::test]
    async fn test_category_resolution_falls_back_to_unknown() {
        let (catalog, _temp) = create_test_service().await;

        assert_eq!(catalog.category_name("cat-coiffure"), "Coiffure");
        assert_eq!(catalog.category_name("cat-gone"), config::UNKNOWN_LABEL);
    }

    #[tokio::test]
    async fn test_deleting_category_leaves_services_dangling() {
        let (catalog, _temp) = create_test_service().await;

        assert!(catalog.delete_category("cat-onglerie").await.unwrap());

        // The service still references the deleted category
        let views = catalog.service_views();
        let manucure = views
            .iter()
            .find(|v| v.service.name == "Manucure")
            .unwrap();
        assert_eq!(manucure.service.category, "cat-onglerie");
        assert_eq!(manucure.category_name, config::UNKNOWN_LABEL);
    }

    #[tokio::test]
    async fn test_services_in_category() {
        let (catalog, _temp) = create_test_service().await;

        let coiffure = catalog.services_in_category("cat-coiffure");
        assert!(!coiffure.is_empty());
        assert!(coiffure.iter().all(|s| s.category == "cat-coiffure"));
    }
}
