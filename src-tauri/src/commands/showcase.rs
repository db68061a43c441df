//! Showcase commands
//!
//! Partners and the realization gallery.

use crate::app::AppState;
use crate::error::Result;
use crate::services::showcase::RealizationView;
use crate::store::{Partner, PartnerDraft, Realization, RealizationDraft};
use tauri::State;

// ===== Partners =====

/// List all partners (admin)
#[tauri::command]
pub async fn list_partners(state: State<'_, AppState>) -> Result<Vec<Partner>> {
    Ok(state.showcase.list_partners())
}

/// List active partners (public partner strip)
#[tauri::command]
pub async fn list_active_partners(state: State<'_, AppState>) -> Result<Vec<Partner>> {
    Ok(state.showcase.active_partners())
}

/// Create a new partner
#[tauri::command]
pub async fn create_partner(state: State<'_, AppState>, draft: PartnerDraft) -> Result<Partner> {
    state.showcase.create_partner(draft).await
}

/// Update a partner
#[tauri::command]
pub async fn update_partner(
    state: State<'_, AppState>,
    id: String,
    draft: PartnerDraft,
) -> Result<()> {
    state.showcase.update_partner(&id, draft).await?;
    Ok(())
}

/// Delete a partner
#[tauri::command]
pub async fn delete_partner(state: State<'_, AppState>, id: String) -> Result<()> {
    state.showcase.delete_partner(&id).await?;
    Ok(())
}

/// Toggle a partner between active and inactive
#[tauri::command]
pub async fn toggle_partner(state: State<'_, AppState>, id: String) -> Result<()> {
    state.showcase.toggle_partner(&id).await?;
    Ok(())
}

// ===== Realizations =====

/// List all realizations
#[tauri::command]
pub async fn list_realizations(state: State<'_, AppState>) -> Result<Vec<Realization>> {
    Ok(state.showcase.list_realizations())
}

/// List realizations with resolved service names (gallery)
#[tauri::command]
pub async fn list_realization_views(
    state: State<'_, AppState>,
) -> Result<Vec<RealizationView>> {
    Ok(state.showcase.realization_views())
}

/// Create a new realization
#[tauri::command]
pub async fn create_realization(
    state: State<'_, AppState>,
    draft: RealizationDraft,
) -> Result<Realization> {
    state.showcase.create_realization(draft).await
}

/// Update a realization
#[tauri::command]
pub async fn update_realization(
    state: State<'_, AppState>,
    id: String,
    draft: RealizationDraft,
) -> Result<()> {
    state.showcase.update_realization(&id, draft).await?;
    Ok(())
}

/// Delete a realization
#[tauri::command]
pub async fn delete_realization(state: State<'_, AppState>, id: String) -> Result<()> {
    state.showcase.delete_realization(&id).await?;
    Ok(())
}
