//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::EntryKind;

/// Domain errors represent form rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("star rating must be between 1 and 5, got {0}")]
    InvalidStarRating(f64),

    #[error("no {kind} entry at position {position}")]
    EntryNotFound { kind: EntryKind, position: usize },

    #[error("unknown subject domain: {0}")]
    UnknownDomain(String),

    #[error("unknown payload schema: {0}")]
    UnknownSchema(String),
}
