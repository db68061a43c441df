//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All stores and services are initialized here and made available
//! through AppState.

use crate::config;
use crate::error::Result;
use crate::services::{
    CatalogService, DeleteGuard, DeleteTarget, ModerationService, NewsService, ProductsService,
    SettingsService, ShowcaseService, VisitTracker,
};
use crate::storage::SlotStore;
use crate::store::{
    Category, EntityStore, Feedback, News, Partner, Product, ProductCategory, Realization,
    Service, Testimonial,
};
use std::path::PathBuf;
use tauri::{App, Manager};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub app_data_dir: PathBuf,
    pub catalog: CatalogService,
    pub products: ProductsService,
    pub showcase: ShowcaseService,
    pub moderation: ModerationService,
    pub news: NewsService,
    pub settings: SettingsService,
    pub visits: VisitTracker,
    pub deletions: DeleteGuard<DeleteTarget>,
}

impl AppState {
    /// Open every entity store (seeding defaults on first launch) and
    /// wire the services together
    pub async fn initialize(app_data_dir: PathBuf) -> Result<Self> {
        let slots = SlotStore::new(app_data_dir.join(config::STORE_DIR));
        slots.initialize().await?;

        let services: EntityStore<Service> = EntityStore::open(slots.clone()).await?;
        let categories: EntityStore<Category> = EntityStore::open(slots.clone()).await?;
        let products: EntityStore<Product> = EntityStore::open(slots.clone()).await?;
        let product_categories: EntityStore<ProductCategory> =
            EntityStore::open(slots.clone()).await?;
        let partners: EntityStore<Partner> = EntityStore::open(slots.clone()).await?;
        let realizations: EntityStore<Realization> = EntityStore::open(slots.clone()).await?;
        let testimonials: EntityStore<Testimonial> = EntityStore::open(slots.clone()).await?;
        let news: EntityStore<News> = EntityStore::open(slots.clone()).await?;
        let feedbacks: EntityStore<Feedback> = EntityStore::open(slots.clone()).await?;

        Ok(Self {
            app_data_dir,
            catalog: CatalogService::new(services.clone(), categories),
            products: ProductsService::new(products, product_categories),
            showcase: ShowcaseService::new(partners, realizations, services),
            moderation: ModerationService::new(testimonials, feedbacks),
            news: NewsService::new(news),
            settings: SettingsService::new(slots.clone()),
            visits: VisitTracker::new(slots),
            deletions: DeleteGuard::new(),
        })
    }
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let app_data_dir = app.path().app_data_dir()?;

    tracing::info!("App data directory: {:?}", app_data_dir);

    std::fs::create_dir_all(&app_data_dir)?;

    let state = tauri::async_runtime::block_on(AppState::initialize(app_data_dir))?;
    app.manage(state);

    tracing::info!("Application initialized successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_initialize_seeds_every_slot() {
        let temp_dir = TempDir::new().unwrap();

        let state = AppState::initialize(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        assert!(!state.catalog.list_services().is_empty());
        assert!(!state.catalog.list_categories().is_empty());
        assert!(!state.products.list_products().is_empty());
        assert!(!state.products.list_product_categories().is_empty());
        assert!(!state.showcase.list_partners().is_empty());
        assert!(!state.showcase.list_realizations().is_empty());
        assert!(!state.moderation.list_testimonials().is_empty());
        assert!(!state.news.list_news().is_empty());
        // Feedback starts empty by design
        assert!(state.moderation.list_feedbacks().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_path_buf();

        let first = AppState::initialize(dir.clone()).await.unwrap();
        let service = first
            .catalog
            .list_services()
            .into_iter()
            .next()
            .unwrap();
        first.catalog.delete_service(&service.id).await.unwrap();
        let remaining = first.catalog.list_services();

        // A second launch adopts the persisted state, not the seeds
        let second = AppState::initialize(dir).await.unwrap();
        assert_eq!(second.catalog.list_services(), remaining);
    }
}
