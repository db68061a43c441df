//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `catalog`: Service and category management
//! - `products`: Product and shelf-category management
//! - `showcase`: Partners and the realization gallery
//! - `moderation`: Testimonials and visitor feedback
//! - `news`: News items
//! - `settings`: Appointment and admin settings
//! - `deletion`: Confirmation-gated deletion flow

use crate::app::AppState;
use crate::error::{AppError, Result};
use tauri::State;
use tauri_plugin_shell::ShellExt;

pub mod catalog;
pub mod deletion;
pub mod moderation;
pub mod news;
pub mod products;
pub mod settings;
pub mod showcase;

// Re-export all commands for convenient registration in main.rs
pub use catalog::*;
pub use deletion::*;
pub use moderation::*;
pub use news::*;
pub use products::*;
pub use settings::*;
pub use showcase::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info(state: State<'_, AppState>) -> Result<AppInfo> {
    Ok(AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        app_data_dir: state.app_data_dir.to_string_lossy().to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
    pub app_data_dir: String,
}

/// Record a visit; bumps the external counter the first time only
#[tauri::command]
pub async fn record_visit(state: State<'_, AppState>) -> Result<bool> {
    state.visits.record_visit().await
}

/// Open a partner website or the scheduling page in the default browser
#[tauri::command]
pub async fn open_external(app: tauri::AppHandle, url: String) -> Result<()> {
    tracing::debug!("Opening external URL: {}", url);
    app.shell()
        .open(url, None)
        .map_err(|e| AppError::Generic(format!("Failed to open URL: {}", e)))
}
