//! Category Entity
//!
//! A named, colored grouping that owns an ordered list of content items.
//! The whole persisted state is a [`Collection`] of categories.

use serde::{Deserialize, Serialize};

use super::content::ContentItem;
use super::entity::{first_duplicate_id, position_by_id, DomainError, DomainResult, Entity};
use super::id::new_category_id;

/// Ordered set of categories, persisted as one snapshot
pub type Collection = Vec<CategoryItem>;

/// A category and the content it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// Display name
    pub category_name: String,
    /// Unique within the collection
    pub category_id: String,
    /// Display color (e.g., "#ff0000")
    pub category_color: String,
    /// Content items in insertion order
    pub context: Vec<ContentItem>,
}

impl CategoryItem {
    /// Create an empty category with a fresh ID
    pub fn new(name: String, color: String) -> Self {
        Self {
            category_name: name,
            category_id: new_category_id(),
            category_color: color,
            context: Vec::new(),
        }
    }

    /// Find a content item by ID
    pub fn find_content(&self, content_id: &str) -> Option<&ContentItem> {
        self.context.iter().find(|item| item.id == content_id)
    }

    /// Remove the content item with the given ID
    pub fn remove_content(&mut self, content_id: &str) -> DomainResult<ContentItem> {
        let index = position_by_id(&self.context, content_id)
            .ok_or_else(|| DomainError::NotFound(format!("content {}", content_id)))?;
        Ok(self.context.remove(index))
    }

    /// Remove the first content item whose payload equals `text`
    pub fn remove_content_by_text(&mut self, text: &str) -> DomainResult<ContentItem> {
        let index = self
            .context
            .iter()
            .position(|item| item.content == text)
            .ok_or_else(|| DomainError::NotFound(format!("content matching {:?}", text)))?;
        Ok(self.context.remove(index))
    }

    /// Check that content IDs are unique within this category
    pub fn validate(&self) -> DomainResult<()> {
        match first_duplicate_id(&self.context) {
            Some(id) => Err(DomainError::Conflict(format!(
                "duplicate content id {} in category {}",
                id, self.category_id
            ))),
            None => Ok(()),
        }
    }
}

impl Entity for CategoryItem {
    fn id(&self) -> &str {
        &self.category_id
    }
}

/// Check the uniqueness invariants of a whole collection
pub fn validate_collection(categories: &[CategoryItem]) -> DomainResult<()> {
    if let Some(id) = first_duplicate_id(categories) {
        return Err(DomainError::Conflict(format!("duplicate category id {}", id)));
    }
    categories.iter().try_for_each(CategoryItem::validate)
}
