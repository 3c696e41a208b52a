//! Domain Layer - Core Entity Trait
//!
//! Every stored record carries a string identifier that is unique among its siblings.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Index of the entity with the given ID, if present
pub fn position_by_id<T: Entity>(entities: &[T], id: &str) -> Option<usize> {
    entities.iter().position(|entity| entity.id() == id)
}

/// First identifier that occurs more than once, if any
pub fn first_duplicate_id<T: Entity>(entities: &[T]) -> Option<&str> {
    let mut seen = std::collections::HashSet::with_capacity(entities.len());
    entities
        .iter()
        .map(|entity| entity.id())
        .find(|id| !seen.insert(*id))
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    NotFound(String),
    Conflict(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
