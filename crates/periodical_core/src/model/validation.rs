//! Field rules shared by author/magazine/article models.
//!
//! # Responsibility
//! - Own the length bounds for every validated field.
//! - Define the single error type returned by constructors and setters.
//!
//! # Invariants
//! - Lengths are counted in chars, not bytes.
//! - Validation never mutates; callers commit only after `Ok`.

use crate::model::{ArticleId, AuthorId, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum author name length.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Minimum magazine name length (inclusive).
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length (inclusive).
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum magazine category length.
pub const CATEGORY_MIN_CHARS: usize = 1;
/// Minimum article title length (inclusive).
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length (inclusive).
pub const TITLE_MAX_CHARS: usize = 50;

/// Rejection reason for an invalid construction or assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    MagazineNameLength { len: usize },
    EmptyCategory,
    TitleLength { len: usize },
    UnknownMagazine(MagazineId),
    UnknownArticle(ArticleId),
    DuplicateMagazine(MagazineId),
    DuplicateArticle(ArticleId),
    /// Article carries an author id already registered under another name.
    AuthorNameConflict { author: AuthorId },
    /// Snapshot article points at a magazine the snapshot does not contain.
    DanglingArticle {
        article: ArticleId,
        magazine: MagazineId,
    },
}

impl ValidationError {
    /// Stable short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyAuthorName => "empty_author_name",
            Self::MagazineNameLength { .. } => "magazine_name_length",
            Self::EmptyCategory => "empty_category",
            Self::TitleLength { .. } => "title_length",
            Self::UnknownMagazine(_) => "unknown_magazine",
            Self::UnknownArticle(_) => "unknown_article",
            Self::DuplicateMagazine(_) => "duplicate_magazine",
            Self::DuplicateArticle(_) => "duplicate_article",
            Self::AuthorNameConflict { .. } => "author_name_conflict",
            Self::DanglingArticle { .. } => "dangling_article",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {MAGAZINE_NAME_MIN_CHARS}-{MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {TITLE_MIN_CHARS}-{TITLE_MAX_CHARS} characters, got {len}"
            ),
            Self::UnknownMagazine(id) => write!(f, "magazine not found in catalog: {id}"),
            Self::UnknownArticle(id) => write!(f, "article not found in catalog: {id}"),
            Self::DuplicateMagazine(id) => write!(f, "magazine already registered: {id}"),
            Self::DuplicateArticle(id) => write!(f, "article already registered: {id}"),
            Self::AuthorNameConflict { author } => {
                write!(f, "author {author} is already registered under a different name")
            }
            Self::DanglingArticle { article, magazine } => write!(
                f,
                "article {article} references magazine {magazine} missing from snapshot"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < AUTHOR_NAME_MIN_CHARS {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.chars().count() < CATEGORY_MIN_CHARS {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        validate_author_name, validate_category, validate_magazine_name, validate_title,
        ValidationError,
    };

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(validate_magazine_name("GQ").is_ok());
        assert!(validate_magazine_name("Sixteen Chars!!!").is_ok());
        assert_eq!(
            validate_magazine_name("V"),
            Err(ValidationError::MagazineNameLength { len: 1 })
        );
        assert_eq!(
            validate_magazine_name("Seventeen Chars!!"),
            Err(ValidationError::MagazineNameLength { len: 17 })
        );
    }

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(validate_title("Hello").is_ok());
        assert!(validate_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_title("Hi"),
            Err(ValidationError::TitleLength { len: 2 })
        );
        assert_eq!(
            validate_title(&"x".repeat(51)),
            Err(ValidationError::TitleLength { len: 51 })
        );
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        // 5 chars, 10 bytes.
        assert!(validate_title("ééééé").is_ok());
        assert!(validate_magazine_name("日本").is_ok());
    }

    #[test]
    fn whitespace_counts_as_content() {
        assert!(validate_author_name(" ").is_ok());
        assert!(validate_category(" ").is_ok());
        assert_eq!(validate_author_name(""), Err(ValidationError::EmptyAuthorName));
        assert_eq!(validate_category(""), Err(ValidationError::EmptyCategory));
    }

    #[test]
    fn display_carries_reason() {
        let message = ValidationError::TitleLength { len: 2 }.to_string();
        assert!(message.contains("5-50"));
        assert!(message.contains("got 2"));
    }
}
