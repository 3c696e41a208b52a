//! Content Item Entity
//!
//! A labeled text payload owned by exactly one category.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::id::new_content_id;

/// Label given to items created through the text-only legacy calls
pub const LEGACY_LABEL: &str = "Legacy Item";

/// A single piece of saved content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique within the owning category
    pub id: String,
    /// Display name
    pub label: String,
    /// Arbitrary text payload
    pub content: String,
    /// Creation time, ISO-8601 with millisecond precision (`2024-05-01T08:30:00.000Z`)
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ContentItem {
    /// Create a new item stamped with a fresh ID and the current time
    pub fn new(label: String, content: String) -> Self {
        Self {
            id: new_content_id(),
            label,
            content,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl Entity for ContentItem {
    fn id(&self) -> &str {
        &self.id
    }
}
