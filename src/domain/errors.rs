// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(r#"invalid value "" provided for ArticleId: the value cannot be empty"#)]
    EmptyIdentifier,
    #[error(r#"invalid value "{0}" provided for ArticleId: the value must be a positive integer"#)]
    NonPositiveIdentifier(i64),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
