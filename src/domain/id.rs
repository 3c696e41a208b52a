//! Identifier Generation
//!
//! IDs are a type-scoped prefix followed by a random 128-bit UUID, so no
//! registry or coordination between clients is needed.

use uuid::Uuid;

pub const CATEGORY_ID_PREFIX: &str = "cat_";
pub const CONTENT_ID_PREFIX: &str = "content_";

/// Fresh identifier for a category
pub fn new_category_id() -> String {
    prefixed(CATEGORY_ID_PREFIX)
}

/// Fresh identifier for a content item
pub fn new_content_id() -> String {
    prefixed(CONTENT_ID_PREFIX)
}

fn prefixed(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_carry_type_prefix() {
        assert!(new_category_id().starts_with("cat_"));
        assert!(new_content_id().starts_with("content_"));
    }

    #[test]
    fn test_id_suffix_is_a_uuid() {
        let id = new_category_id();
        let suffix = &id[CATEGORY_ID_PREFIX.len()..];
        assert_eq!(suffix.len(), 32);
        assert!(Uuid::parse_str(suffix).is_ok());
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids: HashSet<String> = (0..1000).map(|_| new_content_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
