//! Settings commands
//!
//! Commands for the appointment and admin settings singletons, plus the
//! admin login check.

use crate::app::AppState;
use crate::services::{AdminSettings, AppointmentSettings};
use crate::error::Result;
use tauri::State;

// ===== Appointment Settings =====

/// Get the appointment settings
#[tauri::command]
pub async fn get_appointment_settings(
    state: State<'_, AppState>,
) -> Result<AppointmentSettings> {
    state.settings.appointment().await
}

/// Update the appointment settings
#[tauri::command]
pub async fn update_appointment_settings(
    state: State<'_, AppState>,
    settings: AppointmentSettings,
) -> Result<()> {
    state.settings.update_appointment(settings).await?;
    tracing::info!("Appointment settings updated");
    Ok(())
}

// ===== Admin Settings =====

/// Get the admin settings
#[tauri::command]
pub async fn get_admin_settings(state: State<'_, AppState>) -> Result<AdminSettings> {
    state.settings.admin().await
}

/// Update the admin settings
#[tauri::command]
pub async fn update_admin_settings(
    state: State<'_, AppState>,
    settings: AdminSettings,
) -> Result<()> {
    state.settings.update_admin(settings).await?;
    tracing::info!("Admin settings updated");
    Ok(())
}

/// Check a login attempt against the stored admin credentials
#[tauri::command]
pub async fn verify_admin_credentials(
    state: State<'_, AppState>,
    username: String,
    password: String,
) -> Result<bool> {
    state.settings.verify_credentials(&username, &password).await
}
