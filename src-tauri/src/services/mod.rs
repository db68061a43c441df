//! Services module
//!
//! Business logic services that coordinate between commands and the
//! entity stores.

pub mod catalog;
pub mod deletion;
pub mod moderation;
pub mod news;
pub mod products;
pub mod settings;
pub mod showcase;
pub mod visits;

pub use catalog::CatalogService;
pub use deletion::{DeleteGuard, DeleteTarget};
pub use moderation::ModerationService;
pub use news::NewsService;
pub use products::ProductsService;
pub use settings::{AdminSettings, AppointmentSettings, SettingsService};
pub use showcase::ShowcaseService;
pub use visits::VisitTracker;

use crate::config;
use crate::error::{AppError, Result};

/// Enforce the name-uniqueness invariant shared by services, categories
/// and product categories: names compare case-insensitively after
/// trimming. `exclude_id` skips the record being updated.
pub(crate) fn ensure_unique_name<'a>(
    existing: impl Iterator<Item = (&'a str, &'a str)>,
    candidate: &str,
    exclude_id: Option<&str>,
) -> Result<()> {
    let trimmed = candidate.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation("Le nom est obligatoire".to_string()));
    }
    if trimmed.len() > config::MAX_NAME_LENGTH {
        return Err(AppError::Validation(format!(
            "Le nom dépasse {} caractères",
            config::MAX_NAME_LENGTH
        )));
    }

    let normalized = trimmed.to_lowercase();
    for (id, name) in existing {
        if Some(id) == exclude_id {
            continue;
        }
        if name.trim().to_lowercase() == normalized {
            return Err(AppError::DuplicateName(trimmed.to_string()));
        }
    }

    Ok(())
}

/// Reject oversized inline image payloads before they reach a slot
pub(crate) fn ensure_image_fits(image: Option<&str>) -> Result<()> {
    if let Some(data_url) = image {
        if data_url.len() > config::MAX_IMAGE_DATA_URL_LENGTH {
            return Err(AppError::Validation(
                "L'image est trop volumineuse".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name_is_case_and_whitespace_insensitive() {
        let existing = [("id-1", "Manucure")];
        let iter = || existing.iter().map(|(id, name)| (*id, *name));

        assert!(ensure_unique_name(iter(), "manucure ", None).is_err());
        assert!(ensure_unique_name(iter(), "  MANUCURE", None).is_err());
        assert!(ensure_unique_name(iter(), "Pédicure", None).is_ok());
    }

    #[test]
    fn test_unique_name_excludes_own_id_on_update() {
        let existing = [("id-1", "Manucure"), ("id-2", "Pédicure")];
        let iter = || existing.iter().map(|(id, name)| (*id, *name));

        assert!(ensure_unique_name(iter(), "Manucure", Some("id-1")).is_ok());
        assert!(ensure_unique_name(iter(), "Pédicure", Some("id-1")).is_err());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(ensure_unique_name(std::iter::empty(), "   ", None).is_err());
    }
}
