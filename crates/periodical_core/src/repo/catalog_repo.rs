//! Catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered registries of magazines and articles.
//! - Provide validated create/update entry points on top of raw inserts.
//!
//! # Invariants
//! - Registries are append-only and keep insertion order; only `clear`
//!   empties them.
//! - Every registered article references a registered magazine.
//! - Ids are unique within each registry.
//! - All registered articles sharing an author id carry the same author name.
//! - A rejected write leaves both registries untouched.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::model::validation::ValidationError;
use crate::model::{ArticleId, MagazineId};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Result of a catalog read or write.
pub type CatalogResult<T> = Result<T, ValidationError>;

/// Repository interface over the magazine and article registries.
///
/// Implementors provide storage; validation and logging of the use-case
/// level operations live in the provided methods.
pub trait CatalogRepository {
    /// All registered magazines in registration order.
    fn magazines(&self) -> &[Magazine];
    /// All registered articles in registration order.
    fn articles(&self) -> &[Article];
    /// Mutable handle on a registered magazine.
    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine>;
    /// Mutable handle on a registered article.
    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article>;
    /// Appends an already-validated magazine. Rejects a duplicate id.
    fn insert_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId>;
    /// Appends an already-validated article. Rejects a duplicate id, a
    /// magazine link that is not registered, or an author id already
    /// registered under another name.
    fn insert_article(&mut self, article: Article) -> CatalogResult<ArticleId>;
    /// Drops every registered magazine and article.
    fn clear(&mut self);

    /// Looks up a registered magazine by id.
    fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines().iter().find(|magazine| magazine.id() == id)
    }

    /// Looks up a registered article by id.
    fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles().iter().find(|article| article.id() == id)
    }

    /// Validates and registers a new magazine.
    fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId>
    where
        Self: Sized,
    {
        let magazine = Magazine::new(name, category)
            .inspect_err(|err| log_rejected("magazine_create", err))?;
        self.insert_magazine(magazine)
    }

    /// Validates and registers a new article by `author` in `magazine`.
    fn create_article(
        &mut self,
        author: &Author,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId>
    where
        Self: Sized,
    {
        let article = Article::new(author.clone(), magazine, title)
            .inspect_err(|err| log_rejected("article_create", err))?;
        self.insert_article(article)
    }

    /// Renames a registered magazine, keeping the old name on rejection.
    fn rename_magazine(&mut self, id: MagazineId, name: impl Into<String>) -> CatalogResult<()>
    where
        Self: Sized,
    {
        self.magazine_mut(id)
            .ok_or(ValidationError::UnknownMagazine(id))
            .and_then(|magazine| magazine.set_name(name))
            .inspect_err(|err| log_rejected("magazine_rename", err))?;
        debug!("event=magazine_renamed module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    /// Changes the category of a registered magazine.
    fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()>
    where
        Self: Sized,
    {
        self.magazine_mut(id)
            .ok_or(ValidationError::UnknownMagazine(id))
            .and_then(|magazine| magazine.set_category(category))
            .inspect_err(|err| log_rejected("magazine_recategorize", err))?;
        debug!("event=magazine_recategorized module=catalog status=ok magazine_id={id}");
        Ok(())
    }

    /// Replaces the title of a registered article.
    fn retitle_article(&mut self, id: ArticleId, title: impl Into<String>) -> CatalogResult<()>
    where
        Self: Sized,
    {
        self.article_mut(id)
            .ok_or(ValidationError::UnknownArticle(id))
            .and_then(|article| article.set_title(title))
            .inspect_err(|err| log_rejected("article_retitle", err))?;
        debug!("event=article_retitled module=catalog status=ok article_id={id}");
        Ok(())
    }
}

/// Serializable copy of a catalog's registries, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub magazines: Vec<Magazine>,
    pub articles: Vec<Article>,
}

/// Vec-backed catalog. Created empty; lives as long as its owner.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a catalog from a snapshot, re-checking every link.
    ///
    /// # Errors
    /// - `DuplicateMagazine` / `DuplicateArticle` for repeated ids.
    /// - `DanglingArticle` when an article's magazine is not in the snapshot.
    /// - `AuthorNameConflict` when one author id appears under two names.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for magazine in snapshot.magazines {
            catalog.insert_magazine(magazine)?;
        }
        for article in snapshot.articles {
            let (article_id, magazine_id) = (article.id(), article.magazine_id());
            catalog.insert_article(article).map_err(|err| match err {
                ValidationError::UnknownMagazine(_) => ValidationError::DanglingArticle {
                    article: article_id,
                    magazine: magazine_id,
                },
                other => other,
            })?;
        }
        info!(
            "event=catalog_restored module=catalog status=ok magazines={} articles={}",
            catalog.magazines.len(),
            catalog.articles.len()
        );
        Ok(catalog)
    }

    /// Copies both registries, preserving order.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            magazines: self.magazines.clone(),
            articles: self.articles.clone(),
        }
    }

    /// True when neither registry holds anything.
    pub fn is_empty(&self) -> bool {
        self.magazines.is_empty() && self.articles.is_empty()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines
            .iter_mut()
            .find(|magazine| magazine.id() == id)
    }

    fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.iter_mut().find(|article| article.id() == id)
    }

    fn insert_magazine(&mut self, magazine: Magazine) -> CatalogResult<MagazineId> {
        let id = magazine.id();
        if self.magazine(id).is_some() {
            let err = ValidationError::DuplicateMagazine(id);
            log_rejected("magazine_insert", &err);
            return Err(err);
        }

        self.magazines.push(magazine);
        debug!("event=magazine_created module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    fn insert_article(&mut self, article: Article) -> CatalogResult<ArticleId> {
        let id = article.id();
        let magazine_id = article.magazine_id();
        let author = article.author();
        let rejection = if self.article(id).is_some() {
            Some(ValidationError::DuplicateArticle(id))
        } else if self.magazine(magazine_id).is_none() {
            Some(ValidationError::UnknownMagazine(magazine_id))
        } else if self.articles.iter().any(|existing| {
            existing.author().id() == author.id() && existing.author().name() != author.name()
        }) {
            Some(ValidationError::AuthorNameConflict { author: author.id() })
        } else {
            None
        };
        if let Some(err) = rejection {
            log_rejected("article_insert", &err);
            return Err(err);
        }

        self.articles.push(article);
        debug!(
            "event=article_created module=catalog status=ok article_id={id} magazine_id={magazine_id}"
        );
        Ok(id)
    }

    fn clear(&mut self) {
        let (magazines, articles) = (self.magazines.len(), self.articles.len());
        self.magazines.clear();
        self.articles.clear();
        info!(
            "event=catalog_cleared module=catalog status=ok magazines={magazines} articles={articles}"
        );
    }
}

// Names and titles stay out of logs; only the rejection kind is recorded.
fn log_rejected(event: &str, err: &ValidationError) {
    debug!(
        "event={event} module=catalog status=rejected reason={}",
        err.kind()
    );
}

#[cfg(test)]
mod tests {
    use super::{CatalogRepository, InMemoryCatalog};
    use crate::model::author::Author;
    use crate::model::magazine::Magazine;
    use crate::model::validation::ValidationError;
    use uuid::Uuid;

    #[test]
    fn new_catalog_is_empty() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.magazines().is_empty());
        assert!(catalog.articles().is_empty());
    }

    #[test]
    fn insert_magazine_rejects_duplicate_id() {
        let mut catalog = InMemoryCatalog::new();
        let magazine = Magazine::new("Vogue", "Fashion").expect("valid");
        let id = catalog.insert_magazine(magazine.clone()).expect("first insert");

        let err = catalog.insert_magazine(magazine).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateMagazine(id));
        assert_eq!(catalog.magazines().len(), 1);
    }

    #[test]
    fn create_article_rejects_foreign_magazine() {
        let mut catalog = InMemoryCatalog::new();
        let author = Author::new("Ann").expect("valid");
        let foreign = Uuid::new_v4();

        let err = catalog
            .create_article(&author, foreign, "Valid title")
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownMagazine(foreign));
        assert!(catalog.articles().is_empty());
    }

    #[test]
    fn clear_empties_both_registries() {
        let mut catalog = InMemoryCatalog::new();
        let author = Author::new("Ann").expect("valid");
        let magazine = catalog.create_magazine("Wired", "Tech").expect("valid");
        catalog
            .create_article(&author, magazine, "Chips and more")
            .expect("valid");

        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.magazine(magazine).is_none());
    }

    #[test]
    fn insert_article_rejects_renamed_author_id() {
        let mut catalog = InMemoryCatalog::new();
        let laura = Author::new("Laura").expect("valid");
        let impostor = Author::with_id(laura.id(), "Mallory").expect("valid");
        let magazine = catalog.create_magazine("Vogue", "Fashion").expect("valid");
        catalog
            .create_article(&laura, magazine, "Spring lines")
            .expect("valid");

        let err = catalog
            .create_article(&impostor, magazine, "Autumn lines")
            .unwrap_err();
        assert_eq!(err, ValidationError::AuthorNameConflict { author: laura.id() });
        assert_eq!(catalog.articles().len(), 1);
        assert_eq!(laura.articles(&catalog)[0].author().name(), "Laura");
    }

    #[test]
    fn update_helpers_report_unknown_ids() {
        let mut catalog = InMemoryCatalog::new();
        let missing = Uuid::new_v4();
        assert_eq!(
            catalog.rename_magazine(missing, "Valid").unwrap_err(),
            ValidationError::UnknownMagazine(missing)
        );
        assert_eq!(
            catalog.recategorize_magazine(missing, "News").unwrap_err(),
            ValidationError::UnknownMagazine(missing)
        );
        assert_eq!(
            catalog.retitle_article(missing, "Valid title").unwrap_err(),
            ValidationError::UnknownArticle(missing)
        );
    }
}
