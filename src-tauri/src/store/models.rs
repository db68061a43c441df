//! Entity records
//!
//! Rust structs for every content collection managed by the admin area.
//! All records use serde with camelCase field names for the frontend.
//! Each record type has a matching draft type: the record minus its id,
//! used for both create and update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== Status Flags =====

/// Two-value visibility flag shared by services, categories, products
/// and partners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    /// The opposite flag value
    pub fn toggled(self) -> Self {
        match self {
            EntityStatus::Active => EntityStatus::Inactive,
            EntityStatus::Inactive => EntityStatus::Active,
        }
    }
}

/// Moderation state of a testimonial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialStatus {
    Pending,
    Approved,
    Rejected,
}

/// Publication state of a news item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsStatus {
    Draft,
    Published,
    Archived,
}

/// Triage state of a feedback entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Unread,
    Read,
    Archived,
}

// ===== Catalog =====

/// A price/duration variant of a service (e.g. short vs long hair)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceVariant {
    pub name: String,
    pub duration: String,
    pub price: String,
}

/// A salon service offered to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Soft reference to a Category id; never enforced
    pub category: String,
    pub duration: String,
    pub price: String,
    /// Bullet points shown as "included" on the service page
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub status: EntityStatus,
    /// Inline data URL
    pub image: Option<String>,
    #[serde(default)]
    pub variants: Vec<ServiceVariant>,
}

/// Service payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub price: String,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub status: EntityStatus,
    pub image: Option<String>,
    #[serde(default)]
    pub variants: Vec<ServiceVariant>,
}

/// A service category; categories form an unenforced tree via parent_id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Soft self-reference to another Category id
    pub parent_id: Option<String>,
    pub status: EntityStatus,
    pub image: Option<String>,
}

/// Category payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub status: EntityStatus,
    pub image: Option<String>,
}

// ===== Shop =====

/// A retail product sold at the salon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub brand: Option<String>,
    /// Soft reference to a ProductCategory by name, not id
    pub category: Option<String>,
    pub status: EntityStatus,
}

/// Product payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub status: EntityStatus,
}

/// A shelf grouping for products, referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
}

/// ProductCategory payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDraft {
    pub name: String,
}

// ===== Showcase =====

/// A brand or business the salon partners with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub status: EntityStatus,
}

/// Partner payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDraft {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub status: EntityStatus,
}

/// A before/after photo in the gallery, tied to the service performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Realization {
    pub id: String,
    pub image: String,
    /// Soft reference to a Service id
    pub service_id: String,
    pub caption: String,
    pub title: Option<String>,
}

/// Realization payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizationDraft {
    pub image: String,
    pub service_id: String,
    pub caption: String,
    pub title: Option<String>,
}

// ===== Engagement =====

/// A client testimonial, moderated before publication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub text: String,
    /// 1 to 5 stars
    pub rating: u8,
    /// Soft reference to a Service by name; kept as the display value
    pub service: String,
    pub status: TestimonialStatus,
}

/// Testimonial payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDraft {
    pub name: String,
    pub text: String,
    pub rating: u8,
    pub service: String,
    pub status: TestimonialStatus,
}

/// A news / blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub status: NewsStatus,
}

/// News payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub status: NewsStatus,
}

/// Anonymous visitor feedback from the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub status: FeedbackStatus,
}

/// Feedback payload without an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub status: FeedbackStatus,
}

// ===== Store Wiring =====
//
// Slot names carry over from the original storage keys. Only the
// product-category slot is versioned.

use super::repository::{Record, Toggleable};
use super::seeds;
use crate::config;

impl Record for Service {
    const SLOT: &'static str = "services";
    type Draft = ServiceDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ServiceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            category: draft.category,
            duration: draft.duration,
            price: draft.price,
            included: draft.included,
            excluded: draft.excluded,
            status: draft.status,
            image: draft.image,
            variants: draft.variants,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_services()
    }
}

impl Toggleable for Service {
    fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

impl Record for Category {
    const SLOT: &'static str = "categories";
    type Draft = CategoryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            parent_id: draft.parent_id,
            status: draft.status,
            image: draft.image,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_categories()
    }
}

impl Toggleable for Category {
    fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

impl Record for Product {
    const SLOT: &'static str = "products";
    type Draft = ProductDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            image: draft.image,
            brand: draft.brand,
            category: draft.category,
            status: draft.status,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_products()
    }
}

impl Toggleable for Product {
    fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

impl Record for ProductCategory {
    const SLOT: &'static str = "productCategories";
    const VERSION: Option<&'static str> = Some(config::PRODUCT_CATEGORIES_VERSION);
    type Draft = ProductCategoryDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ProductCategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_product_categories()
    }
}

impl Record for Partner {
    const SLOT: &'static str = "partners";
    type Draft = PartnerDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: PartnerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            logo: draft.logo,
            website: draft.website,
            status: draft.status,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_partners()
    }
}

impl Toggleable for Partner {
    fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

impl Record for Realization {
    const SLOT: &'static str = "realizations";
    type Draft = RealizationDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: RealizationDraft) -> Self {
        Self {
            id,
            image: draft.image,
            service_id: draft.service_id,
            caption: draft.caption,
            title: draft.title,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_realizations()
    }
}

impl Record for Testimonial {
    const SLOT: &'static str = "testimonials";
    type Draft = TestimonialDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: TestimonialDraft) -> Self {
        Self {
            id,
            name: draft.name,
            text: draft.text,
            rating: draft.rating,
            service: draft.service,
            status: draft.status,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_testimonials()
    }
}

impl Record for News {
    const SLOT: &'static str = "news";
    type Draft = NewsDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: NewsDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            image: draft.image,
            published_at: draft.published_at,
            status: draft.status,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_news()
    }
}

impl Record for Feedback {
    const SLOT: &'static str = "feedbacks";
    type Draft = FeedbackDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: FeedbackDraft) -> Self {
        Self {
            id,
            rating: draft.rating,
            comment: draft.comment,
            created_at: draft.created_at,
            status: draft.status,
        }
    }

    fn seed() -> Vec<Self> {
        seeds::default_feedbacks()
    }
}
