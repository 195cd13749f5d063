//! Magazine domain model.
//!
//! # Responsibility
//! - Hold a magazine's validated name and category.
//! - Derive per-magazine aggregates (articles, contributors, titles) and the
//!   catalog-wide top publisher.
//!
//! # Invariants
//! - `name` is 2-16 chars and `category` is non-empty while the value lives.
//! - A rejected setter leaves the previous value in place.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};
use crate::model::{AuthorId, MagazineId};
use crate::repo::catalog_repo::CatalogRepository;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Authors need strictly more than this many articles in one magazine to
/// count as contributing authors.
const CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE: usize = 2;

/// A named, categorized publication. Equality and hashing use `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

#[derive(Deserialize)]
struct MagazineRecord {
    id: MagazineId,
    name: String,
    category: String,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.name, record.category)
    }
}

impl Magazine {
    /// Validates a new magazine. Callers outside the crate go through
    /// `CatalogRepository::create_magazine`, which also registers it.
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, category)
    }

    pub(crate) fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self { id, name, category })
    }

    /// Stable identity used by article links.
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// Current name, 2-16 chars.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current category, never empty.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name when it is 2-16 chars long.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category when it is non-empty.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Articles published in this magazine, in catalog registration order.
    pub fn articles<'c, C>(&self, catalog: &'c C) -> Vec<&'c Article>
    where
        C: CatalogRepository + ?Sized,
    {
        catalog
            .articles()
            .iter()
            .filter(|article| article.magazine_id() == self.id)
            .collect()
    }

    /// Distinct authors published here, first appearance first.
    pub fn contributors<'c, C>(&self, catalog: &'c C) -> Vec<&'c Author>
    where
        C: CatalogRepository + ?Sized,
    {
        let mut seen = HashSet::new();
        self.articles(catalog)
            .into_iter()
            .map(Article::author)
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    /// Titles of this magazine's articles, or `None` when it has none.
    pub fn article_titles<'c, C>(&self, catalog: &'c C) -> Option<Vec<&'c str>>
    where
        C: CatalogRepository + ?Sized,
    {
        let titles: Vec<&str> = self
            .articles(catalog)
            .into_iter()
            .map(Article::title)
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// Counts are local to this magazine. Returns `None` when nobody
    /// qualifies.
    pub fn contributing_authors<'c, C>(&self, catalog: &'c C) -> Option<Vec<&'c Author>>
    where
        C: CatalogRepository + ?Sized,
    {
        let articles = self.articles(catalog);
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in &articles {
            *counts.entry(article.author().id()).or_default() += 1;
        }

        let mut seen = HashSet::new();
        let authors: Vec<&Author> = articles
            .into_iter()
            .map(Article::author)
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or_default()
                    > CONTRIBUTING_AUTHOR_MIN_EXCLUSIVE
            })
            .filter(|author| seen.insert(author.id()))
            .collect();
        if authors.is_empty() {
            None
        } else {
            Some(authors)
        }
    }

    /// The magazine with the most articles across the whole catalog.
    ///
    /// Ties go to the magazine registered first. Returns `None` when no
    /// magazine has any articles.
    pub fn top_publisher<C>(catalog: &C) -> Option<&Magazine>
    where
        C: CatalogRepository + ?Sized,
    {
        let mut top: Option<(&Magazine, usize)> = None;
        for magazine in catalog.magazines() {
            let count = magazine.articles(catalog).len();
            if count == 0 {
                continue;
            }
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::validation::ValidationError;

    #[test]
    fn rejected_name_keeps_previous_value() {
        let mut magazine = Magazine::new("Vogue", "Fashion").expect("valid");
        let err = magazine.set_name("V").unwrap_err();
        assert_eq!(err, ValidationError::MagazineNameLength { len: 1 });
        assert_eq!(magazine.name(), "Vogue");

        magazine.set_name("Vogue Paris").expect("valid rename");
        assert_eq!(magazine.name(), "Vogue Paris");
    }

    #[test]
    fn rejected_category_keeps_previous_value() {
        let mut magazine = Magazine::new("Wired", "Tech").expect("valid");
        assert_eq!(
            magazine.set_category("").unwrap_err(),
            ValidationError::EmptyCategory
        );
        assert_eq!(magazine.category(), "Tech");
    }

    #[test]
    fn constructor_validates_both_fields() {
        assert!(matches!(
            Magazine::new("A very long magazine name", "News"),
            Err(ValidationError::MagazineNameLength { len: 25 })
        ));
        assert_eq!(
            Magazine::new("Time", "").unwrap_err(),
            ValidationError::EmptyCategory
        );
    }
}
