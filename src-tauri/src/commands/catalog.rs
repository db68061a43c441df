//! Catalog commands
//!
//! CRUD operations for salon services and their categories.

use crate::app::AppState;
use crate::error::Result;
use crate::services::catalog::ServiceView;
use crate::store::{Category, CategoryDraft, Service, ServiceDraft};
use tauri::State;

// ===== Services =====

/// List all services (admin)
#[tauri::command]
pub async fn list_services(state: State<'_, AppState>) -> Result<Vec<Service>> {
    Ok(state.catalog.list_services())
}

/// List active services (public site)
#[tauri::command]
pub async fn list_active_services(state: State<'_, AppState>) -> Result<Vec<Service>> {
    Ok(state.catalog.active_services())
}

/// List active services of one category (per-category page)
#[tauri::command]
pub async fn list_services_in_category(
    state: State<'_, AppState>,
    category_id: String,
) -> Result<Vec<Service>> {
    Ok(state.catalog.services_in_category(&category_id))
}

/// List all services with resolved category names (admin table)
#[tauri::command]
pub async fn list_service_views(state: State<'_, AppState>) -> Result<Vec<ServiceView>> {
    Ok(state.catalog.service_views())
}

/// Create a new service
#[tauri::command]
pub async fn create_service(state: State<'_, AppState>, draft: ServiceDraft) -> Result<Service> {
    state.catalog.create_service(draft).await
}

/// Update a service
#[tauri::command]
pub async fn update_service(
    state: State<'_, AppState>,
    id: String,
    draft: ServiceDraft,
) -> Result<()> {
    state.catalog.update_service(&id, draft).await?;
    Ok(())
}

/// Delete a service
#[tauri::command]
pub async fn delete_service(state: State<'_, AppState>, id: String) -> Result<()> {
    state.catalog.delete_service(&id).await?;
    Ok(())
}

/// Toggle a service between active and inactive
#[tauri::command]
pub async fn toggle_service(state: State<'_, AppState>, id: String) -> Result<()> {
    state.catalog.toggle_service(&id).await?;
    Ok(())
}

// ===== Categories =====

/// List all categories (admin)
#[tauri::command]
pub async fn list_categories(state: State<'_, AppState>) -> Result<Vec<Category>> {
    Ok(state.catalog.list_categories())
}

/// List active categories (public navigation)
#[tauri::command]
pub async fn list_active_categories(state: State<'_, AppState>) -> Result<Vec<Category>> {
    Ok(state.catalog.active_categories())
}

/// Create a new category
#[tauri::command]
pub async fn create_category(
    state: State<'_, AppState>,
    draft: CategoryDraft,
) -> Result<Category> {
    state.catalog.create_category(draft).await
}

/// Update a category
#[tauri::command]
pub async fn update_category(
    state: State<'_, AppState>,
    id: String,
    draft: CategoryDraft,
) -> Result<()> {
    state.catalog.update_category(&id, draft).await?;
    Ok(())
}

/// Delete a category
#[tauri::command]
pub async fn delete_category(state: State<'_, AppState>, id: String) -> Result<()> {
    state.catalog.delete_category(&id).await?;
    Ok(())
}

/// Toggle a category between active and inactive
#[tauri::command]
pub async fn toggle_category(state: State<'_, AppState>, id: String) -> Result<()> {
    state.catalog.toggle_category(&id).await?;
    Ok(())
}
