//! Deletion commands
//!
//! The confirm-before-delete flow. The frontend requests a deletion
//! with a display label, shows the confirmation prompt, then either
//! confirms (the stored target is deleted) or cancels.

use crate::app::AppState;
use crate::error::Result;
use crate::services::DeleteTarget;
use tauri::State;

/// Stage a deletion, replacing any pending one
#[tauri::command]
pub fn request_delete(state: State<'_, AppState>, label: String, target: DeleteTarget) {
    state.deletions.request(label, target);
}

/// Label of the pending deletion, for the confirmation prompt
#[tauri::command]
pub fn pending_delete(state: State<'_, AppState>) -> Option<String> {
    state.deletions.pending_label()
}

/// Discard the pending deletion without acting on it
#[tauri::command]
pub fn cancel_delete(state: State<'_, AppState>) {
    state.deletions.cancel();
}

/// Carry out the pending deletion. Returns false when nothing was
/// pending (e.g. a second confirm for the same prompt).
#[tauri::command]
pub async fn confirm_delete(state: State<'_, AppState>) -> Result<bool> {
    let Some((label, target)) = state.deletions.confirm() else {
        return Ok(false);
    };

    tracing::info!("Deletion confirmed: {}", label);

    match target {
        DeleteTarget::Service(id) => state.catalog.delete_service(&id).await?,
        DeleteTarget::Category(id) => state.catalog.delete_category(&id).await?,
        DeleteTarget::Product(id) => state.products.delete_product(&id).await?,
        DeleteTarget::ProductCategory(id) => state.products.delete_product_category(&id).await?,
        DeleteTarget::Partner(id) => state.showcase.delete_partner(&id).await?,
        DeleteTarget::Realization(id) => state.showcase.delete_realization(&id).await?,
        DeleteTarget::Testimonial(id) => state.moderation.delete_testimonial(&id).await?,
        DeleteTarget::News(id) => state.news.delete_news(&id).await?,
        DeleteTarget::Feedback(id) => state.moderation.delete_feedback(&id).await?,
    };

    Ok(true)
}
