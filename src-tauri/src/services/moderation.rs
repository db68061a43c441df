//! Moderation service
//!
//! Testimonials and visitor feedback. Both arrive from the public site
//! and start in a pending/unread state; the admin area moves them
//! through their status flags with no transition restrictions.

use crate::config;
use crate::error::{AppError, Result};
use crate::store::{
    EntityStore, Feedback, FeedbackDraft, FeedbackStatus, Testimonial, TestimonialDraft,
    TestimonialStatus,
};
use chrono::Utc;

/// Service for managing testimonials and feedback
#[derive(Clone)]
pub struct ModerationService {
    testimonials: EntityStore<Testimonial>,
    feedbacks: EntityStore<Feedback>,
}

impl ModerationService {
    pub fn new(testimonials: EntityStore<Testimonial>, feedbacks: EntityStore<Feedback>) -> Self {
        Self {
            testimonials,
            feedbacks,
        }
    }

    // ===== Testimonials =====

    pub fn list_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.list()
    }

    /// Approved testimonials only (public site)
    pub fn approved_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials
            .list()
            .into_iter()
            .filter(|t| t.status == TestimonialStatus::Approved)
            .collect()
    }

    /// Public submission; the status is always forced to pending
    pub async fn submit_testimonial(
        &self,
        name: String,
        text: String,
        rating: u8,
        service: String,
    ) -> Result<Testimonial> {
        ensure_rating_in_bounds(rating)?;

        tracing::info!("New testimonial submitted by: {}", name);

        self.testimonials
            .add(TestimonialDraft {
                name,
                text,
                rating,
                service,
                status: TestimonialStatus::Pending,
            })
            .await
    }

    /// Admin edit of a testimonial
    pub async fn update_testimonial(
        &self,
        id: &str,
        draft: TestimonialDraft,
    ) -> Result<Option<Testimonial>> {
        ensure_rating_in_bounds(draft.rating)?;
        self.testimonials.update(id, draft).await
    }

    /// Set a testimonial's moderation state directly
    pub async fn set_testimonial_status(
        &self,
        id: &str,
        status: TestimonialStatus,
    ) -> Result<Option<Testimonial>> {
        tracing::info!("Setting testimonial {} to {:?}", id, status);
        self.testimonials.modify(id, |t| t.status = status).await
    }

    /// Delete a testimonial
    pub async fn delete_testimonial(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting testimonial: {}", id);
        self.testimonials.delete(id).await
    }

    // ===== Feedback =====

    pub fn list_feedbacks(&self) -> Vec<Feedback> {
        self.feedbacks.list()
    }

    /// Number of feedback entries the admin has not read yet
    pub fn unread_feedback_count(&self) -> usize {
        self.feedbacks
            .list()
            .iter()
            .filter(|f| f.status == FeedbackStatus::Unread)
            .count()
    }

    /// Public submission; always arrives unread, stamped now
    pub async fn submit_feedback(&self, rating: u8, comment: String) -> Result<Feedback> {
        ensure_rating_in_bounds(rating)?;

        tracing::info!("New feedback submitted (rating {})", rating);

        self.feedbacks
            .add(FeedbackDraft {
                rating,
                comment,
                created_at: Utc::now(),
                status: FeedbackStatus::Unread,
            })
            .await
    }

    /// Set a feedback entry's triage state directly
    pub async fn set_feedback_status(
        &self,
        id: &str,
        status: FeedbackStatus,
    ) -> Result<Option<Feedback>> {
        self.feedbacks.modify(id, |f| f.status = status).await
    }

    /// Delete a feedback entry
    pub async fn delete_feedback(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting feedback: {}", id);
        self.feedbacks.delete(id).await
    }
}

fn ensure_rating_in_bounds(rating: u8) -> Result<()> {
    if !(config::MIN_RATING..=config::MAX_RATING).contains(&rating) {
        return Err(AppError::Validation(format!(
            "La note doit être comprise entre {} et {}",
            config::MIN_RATING,
            config::MAX_RATING
        )));
    }
    Ok(())
}
