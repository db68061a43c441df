//! News commands

use crate::app::AppState;
use crate::error::Result;
use crate::store::{News, NewsDraft, NewsStatus};
use tauri::State;

/// List all news items (admin)
#[tauri::command]
pub async fn list_news(state: State<'_, AppState>) -> Result<Vec<News>> {
    Ok(state.news.list_news())
}

/// List published news, newest first (public news page)
#[tauri::command]
pub async fn list_published_news(state: State<'_, AppState>) -> Result<Vec<News>> {
    Ok(state.news.published_news())
}

/// Create a news item
#[tauri::command]
pub async fn create_news(state: State<'_, AppState>, draft: NewsDraft) -> Result<News> {
    state.news.create_news(draft).await
}

/// Update a news item
#[tauri::command]
pub async fn update_news(state: State<'_, AppState>, id: String, draft: NewsDraft) -> Result<()> {
    state.news.update_news(&id, draft).await?;
    Ok(())
}

/// Set a news item's publication state
#[tauri::command]
pub async fn set_news_status(
    state: State<'_, AppState>,
    id: String,
    status: NewsStatus,
) -> Result<()> {
    state.news.set_news_status(&id, status).await?;
    Ok(())
}

/// Delete a news item
#[tauri::command]
pub async fn delete_news(state: State<'_, AppState>, id: String) -> Result<()> {
    state.news.delete_news(&id).await?;
    Ok(())
}
