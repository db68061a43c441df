//! News service
//!
//! Blog-style news items with a draft/published/archived lifecycle.

use super::ensure_image_fits;
use crate::error::Result;
use crate::store::{EntityStore, News, NewsDraft, NewsStatus};

/// Service for managing news items
#[derive(Clone)]
pub struct NewsService {
    news: EntityStore<News>,
}

impl NewsService {
    pub fn new(news: EntityStore<News>) -> Self {
        Self { news }
    }

    pub fn list_news(&self) -> Vec<News> {
        self.news.list()
    }

    /// Published items only, newest first (public news page)
    pub fn published_news(&self) -> Vec<News> {
        let mut published: Vec<News> = self
            .news
            .list()
            .into_iter()
            .filter(|n| n.status == NewsStatus::Published)
            .collect();
        published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        published
    }

    /// Create a news item
    pub async fn create_news(&self, draft: NewsDraft) -> Result<News> {
        tracing::info!("Creating news item: {}", draft.title);

        ensure_image_fits(draft.image.as_deref())?;

        let item = self.news.add(draft).await?;

        tracing::info!("News item created: {}", item.id);
        Ok(item)
    }

    /// Replace a news item
    pub async fn update_news(&self, id: &str, draft: NewsDraft) -> Result<Option<News>> {
        tracing::debug!("Updating news item: {}", id);

        ensure_image_fits(draft.image.as_deref())?;

        self.news.update(id, draft).await
    }

    /// Set a news item's publication state directly
    pub async fn set_news_status(&self, id: &str, status: NewsStatus) -> Result<Option<News>> {
        tracing::info!("Setting news item {} to {:?}", id, status);
        self.news.modify(id, |n| n.status = status).await
    }

    /// Delete a news item
    pub async fn delete_news(&self, id: &str) -> Result<bool> {
        tracing::info!("Deleting news item: {}", id);
        self.news.delete(id).await
    }
}
