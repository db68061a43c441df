//! Products service
//!
//! Retail products and their shelf categories. Product → category links
//! are by category *name* (not id), matching the storage format the
//! shop pages consume.

use super::{ensure_image_fits, ensure_unique_name};
use crate::config;
use crate::error::Result;
use crate::store::{
    EntityStatus, EntityStore, Product, ProductCategory, ProductCategoryDraft, ProductDraft,
};
use serde::Serialize;

/// A product joined with its resolved category label
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    /// The stored category name when it still exists, the unknown label
    /// when it dangles, or None for uncategorized products
    pub category_label: Option<String>,
}

/// Service for managing the product shop
#[derive(Clone)]
pub struct ProductsService {
    products: EntityStore<Product>,
    product_categories: EntityStore<ProductCategory>,
}

impl ProductsService {
    pub fn new(
        products: EntityStore<Product>,
        product_categories: EntityStore<ProductCategory>,
    ) -> Self {
        Self {
            products,
            product_categories,
        }
    }

    // ===== Products =====

    pub fn list_products(&self) -> Vec<Product> {
        self.products.list()
    }

    /// List active products only (public shop)
    pub fn active_products(&self) -> Vec<Product> {
        self.products
            .list()
            .into_iter()
            .filter(|p| p.status == EntityStatus::Active)
            .collect()
    }

    /// List active products on a given shelf
    pub fn products_in_category(&self, category_name: &str) -> Vec<Product> {
        self.active_products()
            .into_iter()
            .filter(|p| p.category.as_deref() == Some(category_name))
            .collect()
    }

    /// List all products with their category labels resolved
    pub fn product_views(&self) -> Vec<ProductView> {
        let known: Vec<String> = self
            .product_categories
            .list()
            .into_iter()
            .map(|c| c.name)
            .collect();

        self.products
            .list()
            .into_iter()
            .map(|product| {
                let category_label = product.category.as_ref().map(|name| {
                    if known.contains(name) {
                        name.clone()
                    } else {
                        config::UNKNOWN_LABEL.to_string()
                    }
                });
                ProductView {
                    product,
                    category_label,
                }
            })
            .collect()
    }

    /// Create a new product
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product> {
        tracing::info!("Creating product: {}", draft.name);

        ensure_image_fits(draft.image.as_deref())?;

        let product = self.products.add(draft).await?;

        tracing::info!("Product created: {}", product.id);
        Ok(product)
    }

    /// Replace a product
    pub async fn update_product(&self, id: &str, draft: ProductDraft) -> Result<Option<Product>> {
        tracing::debug!("Updating product: {}", id);

        ensure_image_fits(draft.image.as_deref())?;

        self.products.update(id, draft).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting product: {}", id);
        self.products.delete(id).await
    }

    /// Flip a product between active and inactive
    pub async fn toggle_product(&self, id: &str) -> Result<Option<Product>> {
        self.products.toggle(id).await
    }

    // ===== Product Categories =====

    pub fn list_product_categories(&self) -> Vec<ProductCategory> {
        self.product_categories.list()
    }

    /// Create a new shelf category
    pub async fn create_product_category(
        &self,
        draft: ProductCategoryDraft,
    ) -> Result<ProductCategory> {
        tracing::info!("Creating product category: {}", draft.name);

        self.ensure_category_name_free(&draft.name, None)?;

        self.product_categories.add(draft).await
    }

    /// Rename a shelf category. Products keep their stored name, so a
    /// rename leaves them pointing at the old label (no cascade).
    pub async fn update_product_category(
        &self,
        id: &str,
        draft: ProductCategoryDraft,
    ) -> Result<Option<ProductCategory>> {
        self.ensure_category_name_free(&draft.name, Some(id))?;

        self.product_categories.update(id, draft).await
    }

    /// Delete a shelf category
    pub async fn delete_product_category(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting product category: {}", id);
        self.product_categories.delete(id).await
    }

    fn ensure_category_name_free(&self, name: &str, exclude_id: Option<&str>) -> Result<()> {
        let categories = self.product_categories.list();
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

    async fn create_test_service() -> (ProductsService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path().join("store"));
        slots.initialize().await.unwrap();

        let products = EntityStore::open(slots.clone()).await.unwrap();
        let product_categories = EntityStore::open(slots).await.unwrap();

        (
            ProductsService::new(products, product_categories),
            temp_dir,
        )
    }

    fn product_draft(name: &str, category: Option<&str>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: "Test".to_string(),
            price: 9.9,
            image: None,
            brand: None,
            category: category.map(str::to_string),
            status: EntityStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_duplicate_product_category_rejected() {
        let (shop, _temp) = create_test_service().await;

        let result = shop
            .create_product_category(ProductCategoryDraft {
                name: " shampooings".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::DuplicateName(_))));
    }

    #[tokio::test]
    async fn test_product_names_may_repeat() {
        let (shop, _temp) = create_test_service().await;

        // Uniqueness only applies to category names, not products
        shop.create_product(product_draft("Laque", None)).await.unwrap();
        shop.create_product(product_draft("Laque", None)).await.unwrap();

        let laques: Vec<_> = shop
            .list_products()
            .into_iter()
            .filter(|p| p.name == "Laque")
            .collect();
        assert_eq!(laques.len(), 2);
    }

    #[tokio::test]
    async fn test_dangling_category_name_resolves_to_unknown() {
        let (shop, _temp) = create_test_service().await;

        let orphan = shop
            .create_product(product_draft("Sérum", Some("Rayon disparu")))
            .await
            .unwrap();

        let views = shop.product_views();
        let view = views.iter().find(|v| v.product.id == orphan.id).unwrap();

        assert_eq!(view.category_label.as_deref(), Some(config::UNKNOWN_LABEL));
        // The stored reference itself is untouched
        assert_eq!(view.product.category.as_deref(), Some("Rayon disparu"));
    }

    #[tokio::test]
    async fn test_products_in_category_filters_inactive() {
        let (shop, _temp) = create_test_service().await;

        let shelf = shop.products_in_category("Coiffants");

        // The seeded "Cire coiffante" is inactive and must not appear
        assert!(shelf.iter().all(|p| p.status == EntityStatus::Active));
    }
}
