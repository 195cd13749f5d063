//! Domain model for authors, magazines and the articles joining them.
//!
//! # Responsibility
//! - Define the three entity types and their field validation.
//! - Answer relationship queries by scanning a `CatalogRepository`.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID; equality is identity.
//! - Validated fields are all-or-nothing: a rejected value never lands.
//! - Article author/magazine links are fixed after construction.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;

use uuid::Uuid;

/// Stable identifier of an author.
pub type AuthorId = Uuid;
/// Stable identifier of a magazine.
pub type MagazineId = Uuid;
/// Stable identifier of an article.
pub type ArticleId = Uuid;
