//! Core domain logic for periodical.
//! Authors write articles for magazines; this crate owns the entity rules and
//! the catalog every relationship query runs against.

pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::article::Article;
pub use model::author::Author;
pub use model::magazine::Magazine;
pub use model::validation::{
    ValidationError, AUTHOR_NAME_MIN_CHARS, CATEGORY_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS,
    MAGAZINE_NAME_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
pub use model::{ArticleId, AuthorId, MagazineId};
pub use repo::catalog_repo::{CatalogRepository, CatalogResult, CatalogSnapshot, InMemoryCatalog};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
