//! Author domain model.
//!
//! # Responsibility
//! - Hold the immutable identity and name of a writer.
//! - Derive an author's articles, magazines and topic areas from a catalog.
//!
//! # Invariants
//! - `name` is non-empty and fixed at construction; there is no setter.
//! - Authors are not registered in the catalog. They are discovered through
//!   the articles that carry them.

use crate::model::article::Article;
use crate::model::magazine::Magazine;
use crate::model::validation::{validate_author_name, ValidationError};
use crate::model::{ArticleId, AuthorId, MagazineId};
use crate::repo::catalog_repo::CatalogRepository;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A named writer. Equality and hashing use `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AuthorRecord")]
pub struct Author {
    id: AuthorId,
    name: String,
}

#[derive(Deserialize)]
struct AuthorRecord {
    id: AuthorId,
    name: String,
}

impl TryFrom<AuthorRecord> for Author {
    type Error = ValidationError;

    fn try_from(record: AuthorRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name)
    }
}

impl Author {
    /// Creates an author with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Rebuilds an author whose identity already exists (deserialization).
    pub(crate) fn with_id(id: AuthorId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self { id, name })
    }

    /// Stable identity; two authors are equal exactly when ids match.
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Articles written by this author, in catalog registration order.
    pub fn articles<'c, C>(&self, catalog: &'c C) -> Vec<&'c Article>
    where
        C: CatalogRepository + ?Sized,
    {
        catalog
            .articles()
            .iter()
            .filter(|article| article.author() == self)
            .collect()
    }

    /// Distinct magazines this author has written for, first appearance first.
    pub fn magazines<'c, C>(&self, catalog: &'c C) -> Vec<&'c Magazine>
    where
        C: CatalogRepository + ?Sized,
    {
        let mut seen = HashSet::new();
        self.articles(catalog)
            .into_iter()
            .filter(|article| seen.insert(article.magazine_id()))
            .filter_map(|article| catalog.magazine(article.magazine_id()))
            .collect()
    }

    /// Writes a new article for `magazine` and registers it in `catalog`.
    ///
    /// Nothing is registered when the title or magazine is rejected.
    pub fn add_article<C>(
        &self,
        catalog: &mut C,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError>
    where
        C: CatalogRepository,
    {
        catalog.create_article(self, magazine, title)
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas<C>(&self, catalog: &C) -> Option<BTreeSet<String>>
    where
        C: CatalogRepository + ?Sized,
    {
        let magazines = self.magazines(catalog);
        if magazines.is_empty() {
            return None;
        }
        Some(
            magazines
                .into_iter()
                .map(|magazine| magazine.category().to_string())
                .collect(),
        )
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Author;
    use crate::model::validation::ValidationError;

    #[test]
    fn new_keeps_name_and_assigns_id() {
        let author = Author::new("Laura").expect("non-empty name");
        assert_eq!(author.name(), "Laura");
        assert!(!author.id().is_nil());
    }

    #[test]
    fn new_rejects_empty_name() {
        assert_eq!(
            Author::new("").unwrap_err(),
            ValidationError::EmptyAuthorName
        );
    }

    #[test]
    fn same_name_is_not_same_author() {
        let first = Author::new("Sam").expect("valid");
        let second = Author::new("Sam").expect("valid");
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }
}
