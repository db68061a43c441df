//! Moderation commands
//!
//! Public submission and admin triage of testimonials and feedback.

use crate::app::AppState;
use crate::error::Result;
use crate::store::{
    Feedback, FeedbackStatus, Testimonial, TestimonialDraft, TestimonialStatus,
};
use tauri::State;

// ===== Testimonials =====

/// List all testimonials (admin)
#[tauri::command]
pub async fn list_testimonials(state: State<'_, AppState>) -> Result<Vec<Testimonial>> {
    Ok(state.moderation.list_testimonials())
}

/// List approved testimonials (public site)
#[tauri::command]
pub async fn list_approved_testimonials(
    state: State<'_, AppState>,
) -> Result<Vec<Testimonial>> {
    Ok(state.moderation.approved_testimonials())
}

/// Submit a testimonial from the public site; always lands pending
#[tauri::command]
pub async fn submit_testimonial(
    state: State<'_, AppState>,
    name: String,
    text: String,
    rating: u8,
    service: String,
) -> Result<Testimonial> {
    state
        .moderation
        .submit_testimonial(name, text, rating, service)
        .await
}

/// Admin edit of a testimonial
#[tauri::command]
pub async fn update_testimonial(
    state: State<'_, AppState>,
    id: String,
    draft: TestimonialDraft,
) -> Result<()> {
    state.moderation.update_testimonial(&id, draft).await?;
    Ok(())
}

/// Set a testimonial's moderation state
#[tauri::command]
pub async fn set_testimonial_status(
    state: State<'_, AppState>,
    id: String,
    status: TestimonialStatus,
) -> Result<()> {
    state.moderation.set_testimonial_status(&id, status).await?;
    Ok(())
}

/// Delete a testimonial
#[tauri::command]
pub async fn delete_testimonial(state: State<'_, AppState>, id: String) -> Result<()> {
    state.moderation.delete_testimonial(&id).await?;
    Ok(())
}

// ===== Feedback =====

/// List all feedback entries (admin)
#[tauri::command]
pub async fn list_feedbacks(state: State<'_, AppState>) -> Result<Vec<Feedback>> {
    Ok(state.moderation.list_feedbacks())
}

/// Number of unread feedback entries (admin badge)
#[tauri::command]
pub async fn unread_feedback_count(state: State<'_, AppState>) -> Result<usize> {
    Ok(state.moderation.unread_feedback_count())
}

/// Submit feedback from the public site; always lands unread
#[tauri::command]
pub async fn submit_feedback(
    state: State<'_, AppState>,
    rating: u8,
    comment: String,
) -> Result<Feedback> {
    state.moderation.submit_feedback(rating, comment).await
}

/// Set a feedback entry's triage state
#[tauri::command]
pub async fn set_feedback_status(
    state: State<'_, AppState>,
    id: String,
    status: FeedbackStatus,
) -> Result<()> {
    state.moderation.set_feedback_status(&id, status).await?;
    Ok(())
}

/// Delete a feedback entry
#[tauri::command]
pub async fn delete_feedback(state: State<'_, AppState>, id: String) -> Result<()> {
    state.moderation.delete_feedback(&id).await?;
    Ok(())
}
