//! Entity store module
//!
//! This module provides the persistent data layer:
//! - Model definitions for every content collection
//! - The generic slot-backed entity store
//! - Default datasets seeded on first use

pub mod models;
pub mod repository;
pub mod seeds;

pub use models::*;
pub use repository::{EntityStore, Record, Toggleable};
