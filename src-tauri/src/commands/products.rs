//! Product commands
//!
//! CRUD operations for products and their shelf categories.

use crate::app::AppState;
use crate::error::Result;
use crate::services::products::ProductView;
use crate::store::{Product, ProductCategory, ProductCategoryDraft, ProductDraft};
use tauri::State;

// ===== Products =====

/// List all products (admin)
#[tauri::command]
pub async fn list_products(state: State<'_, AppState>) -> Result<Vec<Product>> {
    Ok(state.products.list_products())
}

/// List active products (public shop)
#[tauri::command]
pub async fn list_active_products(state: State<'_, AppState>) -> Result<Vec<Product>> {
    Ok(state.products.active_products())
}

/// List active products on one shelf
#[tauri::command]
pub async fn list_products_in_category(
    state: State<'_, AppState>,
    category_name: String,
) -> Result<Vec<Product>> {
    Ok(state.products.products_in_category(&category_name))
}

/// List all products with resolved category labels (admin table)
#[tauri::command]
pub async fn list_product_views(state: State<'_, AppState>) -> Result<Vec<ProductView>> {
    Ok(state.products.product_views())
}

/// Create a new product
#[tauri::command]
pub async fn create_product(state: State<'_, AppState>, draft: ProductDraft) -> Result<Product> {
    state.products.create_product(draft).await
}

/// Update a product
#[tauri::command]
pub async fn update_product(
    state: State<'_, AppState>,
    id: String,
    draft: ProductDraft,
) -> Result<()> {
    state.products.update_product(&id, draft).await?;
    Ok(())
}

/// Delete a product
#[tauri::command]
pub async fn delete_product(state: State<'_, AppState>, id: String) -> Result<()> {
    state.products.delete_product(&id).await?;
    Ok(())
}

/// Toggle a product between active and inactive
#[tauri::command]
pub async fn toggle_product(state: State<'_, AppState>, id: String) -> Result<()> {
    state.products.toggle_product(&id).await?;
    Ok(())
}

// ===== Product Categories =====

/// List the shelf categories
#[tauri::command]
pub async fn list_product_categories(
    state: State<'_, AppState>,
) -> Result<Vec<ProductCategory>> {
    Ok(state.products.list_product_categories())
}

/// Create a new shelf category
#[tauri::command]
pub async fn create_product_category(
    state: State<'_, AppState>,
    draft: ProductCategoryDraft,
) -> Result<ProductCategory> {
    state.products.create_product_category(draft).await
}

/// Rename a shelf category
#[tauri::command]
pub async fn update_product_category(
    state: State<'_, AppState>,
    id: String,
    draft: ProductCategoryDraft,
) -> Result<()> {
    state.products.update_product_category(&id, draft).await?;
    Ok(())
}

/// Delete a shelf category
#[tauri::command]
pub async fn delete_product_category(state: State<'_, AppState>, id: String) -> Result<()> {
    state.products.delete_product_category(&id).await?;
    Ok(())
}
