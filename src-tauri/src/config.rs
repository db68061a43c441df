//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the application.

// ===== Storage =====

/// Directory under the app data dir holding the JSON document slots
pub const STORE_DIR: &str = "store";

/// Version tag for the product-category slot.
/// Bump to force a re-seed when the default product categories change.
pub const PRODUCT_CATEGORIES_VERSION: &str = "2";

// ===== Validation Limits =====

/// Minimum rating accepted for testimonials and feedback
pub const MIN_RATING: u8 = 1;

/// Maximum rating accepted for testimonials and feedback
pub const MAX_RATING: u8 = 5;

/// Maximum length for an entity name.
/// Prevents excessively long values from being stored.
pub const MAX_NAME_LENGTH: usize = 120;

/// Maximum length for an inline image data URL (roughly a 1.5 MB upload).
/// Larger payloads bloat the slot files and slow every full-list rewrite.
pub const MAX_IMAGE_DATA_URL_LENGTH: usize = 2_000_000;

// ===== Soft References =====

/// Display label used when a soft reference does not resolve to an
/// existing record (dangling category/service links are tolerated).
pub const UNKNOWN_LABEL: &str = "Inconnu";

// ===== Visit Counter =====

/// External hit-counter endpoint, called once on first launch.
/// Best-effort only; failures are logged and never retried.
pub const VISIT_COUNTER_URL: &str = "https://api.counterapi.dev/v1/salonpanel/visits/up";
