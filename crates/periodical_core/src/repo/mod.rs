//! Repository layer: ordered registries of magazines and articles.
//!
//! # Responsibility
//! - Define the catalog contract every relationship query scans.
//! - Keep registry storage separate from entity rules.
//!
//! # Invariants
//! - Writes go through model constructors/setters, so stored values are
//!   always valid.
//! - Lookups for unknown ids surface as `ValidationError::Unknown*`.

pub mod catalog_repo;
