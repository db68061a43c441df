// salonpanel - Salon content management desktop application
// Entry point and application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod commands;
mod config;
mod error;
mod services;
mod storage;
mod store;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salonpanel=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting salonpanel application");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::record_visit,
            commands::open_external,
            commands::list_services,
            commands::list_active_services,
            commands::list_services_in_category,
            commands::list_service_views,
            commands::create_service,
            commands::update_service,
            commands::delete_service,
            commands::toggle_service,
            commands::list_categories,
            commands::list_active_categories,
            commands::create_category,
            commands::update_category,
            commands::delete_category,
            commands::toggle_category,
            commands::list_products,
            commands::list_active_products,
            commands::list_products_in_category,
            commands::list_product_views,
            commands::create_product,
            commands::update_product,
            commands::delete_product,
            commands::toggle_product,
            commands::list_product_categories,
            commands::create_product_category,
            commands::update_product_category,
            commands::delete_product_category,
            commands::list_partners,
            commands::list_active_partners,
            commands::create_partner,
            commands::update_partner,
            commands::delete_partner,
            commands::toggle_partner,
            commands::list_realizations,
            commands::list_realization_views,
            commands::create_realization,
            commands::update_realization,
            commands::delete_realization,
            commands::list_testimonials,
            commands::list_approved_testimonials,
            commands::submit_testimonial,
            commands::update_testimonial,
            commands::set_testimonial_status,
            commands::delete_testimonial,
            commands::list_feedbacks,
            commands::unread_feedback_count,
            commands::submit_feedback,
            commands::set_feedback_status,
            commands::delete_feedback,
            commands::list_news,
            commands::list_published_news,
            commands::create_news,
            commands::update_news,
            commands::set_news_status,
            commands::delete_news,
            commands::get_appointment_settings,
            commands::update_appointment_settings,
            commands::get_admin_settings,
            commands::update_admin_settings,
            commands::verify_admin_credentials,
            commands::request_delete,
            commands::pending_delete,
            commands::cancel_delete,
            commands::confirm_delete,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
