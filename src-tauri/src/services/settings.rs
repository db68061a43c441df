//! Settings service
//!
//! Manages the two settings singletons: appointment/scheduling options
//! and the general admin settings document. Each singleton owns one
//! JSON slot; loading an absent or unreadable slot restores defaults.

use crate::error::Result;
use crate::storage::SlotStore;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const APPOINTMENT_SLOT: &str = "appointmentSettings";
const ADMIN_SLOT: &str = "adminSettings";

// ===== Appointment Settings =====

/// Scheduling widget configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSettings {
    #[serde(default = "default_calendly_url")]
    pub calendly_url: String,
    /// When set, the public site shows the urgency banner
    #[serde(default)]
    pub urgency_mode: bool,
    #[serde(default = "default_urgency_message")]
    pub urgency_message: String,
}

fn default_calendly_url() -> String {
    "https://calendly.com/salon/rendez-vous".to_string()
}

fn default_urgency_message() -> String {
    "Créneaux limités cette semaine, réservez vite !".to_string()
}

impl Default for AppointmentSettings {
    fn default() -> Self {
        Self {
            calendly_url: default_calendly_url(),
            urgency_mode: false,
            urgency_message: default_urgency_message(),
        }
    }
}

// ===== Admin Settings =====

/// One line of the opening-hours table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub day: String,
    pub open: String,
    pub close: String,
    pub closed: bool,
}

/// Public contact block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "04 72 00 00 00".to_string(),
            email: "contact@salon.fr".to_string(),
            address: "12 rue des Capucins, 69001 Lyon".to_string(),
        }
    }
}

/// Credentials checked by the admin login page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "changezmoi".to_string(),
        }
    }
}

/// Home page hero block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSettings {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            title: "Votre beauté, notre passion".to_string(),
            subtitle: "Coiffure, onglerie et soins au cœur de Lyon".to_string(),
            image: None,
        }
    }
}

/// Social network links shown in the footer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
}

/// General site settings managed from the admin area
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    #[serde(default = "default_opening_hours")]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub admin_credentials: AdminCredentials,
    #[serde(default)]
    pub hero_settings: HeroSettings,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            opening_hours: default_opening_hours(),
            contact_info: ContactInfo::default(),
            admin_credentials: AdminCredentials::default(),
            hero_settings: HeroSettings::default(),
            social_links: SocialLinks::default(),
        }
    }
}

fn default_opening_hours() -> Vec<OpeningHours> {
    let hours = |day: &str, open: &str, close: &str, closed: bool| OpeningHours {
        day: day.to_string(),
        open: open.to_string(),
        close: close.to_string(),
        closed,
    };

    vec![
        hours("Lundi", "", "", true),
        hours("Mardi", "09:00", "19:00", false),
        hours("Mercredi", "09:00", "19:00", false),
        hours("Jeudi", "09:00", "20:00", false),
        hours("Vendredi", "09:00", "20:00", false),
        hours("Samedi", "09:00", "18:00", false),
        hours("Dimanche", "", "", true),
    ]
}

// ===== Service =====

/// Service for managing the settings singletons
#[derive(Clone)]
pub struct SettingsService {
    slots: SlotStore,
}

impl SettingsService {
    pub fn new(slots: SlotStore) -> Self {
        Self { slots }
    }

    /// Get the appointment settings, creating defaults on first use
    pub async fn appointment(&self) -> Result<AppointmentSettings> {
        self.load(APPOINTMENT_SLOT).await
    }

    /// Replace the appointment settings
    pub async fn update_appointment(&self, settings: AppointmentSettings) -> Result<()> {
        self.save(APPOINTMENT_SLOT, &settings).await
    }

    /// Get the admin settings, creating defaults on first use
    pub async fn admin(&self) -> Result<AdminSettings> {
        self.load(ADMIN_SLOT).await
    }

    /// Replace the admin settings
    pub async fn update_admin(&self, settings: AdminSettings) -> Result<()> {
        self.save(ADMIN_SLOT, &settings).await
    }

    /// Check a login attempt against the stored credentials
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        let credentials = self.admin().await?.admin_credentials;
        Ok(credentials.username == username && credentials.password == password)
    }

    /// Load a settings document or restore its defaults
    async fn load<T>(&self, slot: &str) -> Result<T>
    where
        T: Default + Serialize + DeserializeOwned,
    {
        match self.slots.read(slot).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    tracing::warn!("Slot {} unreadable ({}), restoring defaults", slot, e);
                    let defaults = T::default();
                    self.save(slot, &defaults).await?;
                    Ok(defaults)
                }
            },
            None => {
                tracing::info!("Slot {} not found, creating default settings", slot);
                let defaults = T::default();
                self.save(slot, &defaults).await?;
                Ok(defaults)
            }
        }
    }

    async fn save<T: Serialize>(&self, slot: &str, settings: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(settings)?;
        self.slots.write(slot, &contents).await?;
        tracing::info!("Settings saved to slot {}", slot);
        Ok(())
    }
}
