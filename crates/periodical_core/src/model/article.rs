//! Article domain model: the join between one author and one magazine.
//!
//! # Invariants
//! - `author` and `magazine` never change after construction.
//! - `title` is 5-50 chars; a rejected `set_title` keeps the old title.
//! - Articles enter a catalog only through `CatalogRepository`, which checks
//!   the magazine link.

use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::validation::{validate_title, ValidationError};
use crate::model::{ArticleId, MagazineId};
use crate::repo::catalog_repo::CatalogRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled piece written by `author` for the magazine `magazine_id`.
/// Equality uses `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    author: Author,
    magazine_id: MagazineId,
    title: String,
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    author: Author,
    magazine_id: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.author, record.magazine_id, record.title)
    }
}

impl Article {
    /// Validates the title. Does not check that `magazine_id` is registered;
    /// the catalog does that on insert.
    pub(crate) fn new(
        author: Author,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author, magazine_id, title)
    }

    fn with_id(
        id: ArticleId,
        author: Author,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id,
            author,
            magazine_id,
            title,
        })
    }

    /// Stable identity within the catalog.
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// The author fixed at construction.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Id of the magazine fixed at construction.
    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// Resolves the magazine link against `catalog`.
    pub fn magazine<'c, C>(&self, catalog: &'c C) -> Option<&'c Magazine>
    where
        C: CatalogRepository + ?Sized,
    {
        catalog.magazine(self.magazine_id)
    }

    /// Current title, 5-50 chars.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the title when it is 5-50 chars long.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::author::Author;
    use crate::model::validation::ValidationError;
    use uuid::Uuid;

    fn sample() -> Article {
        let author = Author::new("Laura").expect("valid author");
        Article::new(author, Uuid::new_v4(), "Fashion Trends 2024").expect("valid article")
    }

    #[test]
    fn new_rejects_short_title() {
        let author = Author::new("Bob").expect("valid author");
        let err = Article::new(author, Uuid::new_v4(), "Hi").unwrap_err();
        assert_eq!(err, ValidationError::TitleLength { len: 2 });
    }

    #[test]
    fn rejected_title_keeps_previous_value() {
        let mut article = sample();
        let err = article.set_title("x".repeat(51)).unwrap_err();
        assert_eq!(err, ValidationError::TitleLength { len: 51 });
        assert_eq!(article.title(), "Fashion Trends 2024");

        article.set_title("Fashion Trends 2025").expect("valid title");
        assert_eq!(article.title(), "Fashion Trends 2025");
    }
}
