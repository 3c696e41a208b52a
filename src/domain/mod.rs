//! Domain Layer
//!
//! Categories, their content items, and identifier generation.
//! This layer knows nothing about cookies or encoding.

mod category;
mod content;
mod entity;
mod id;

pub use category::{validate_collection, CategoryItem, Collection};
pub use content::{ContentItem, LEGACY_LABEL};
pub use entity::{position_by_id, DomainError, DomainResult, Entity};
pub use id::{new_category_id, new_content_id, CATEGORY_ID_PREFIX, CONTENT_ID_PREFIX};
