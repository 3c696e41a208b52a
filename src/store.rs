//! Category Store
//!
//! Owns the in-memory collection and writes a full snapshot to the cookie
//! after every change. The UI holds one handle for the whole session.

use crate::config::StoreConfig;
use crate::domain::{
    position_by_id, CategoryItem, Collection, ContentItem, DomainError, DomainResult, LEGACY_LABEL,
};
use crate::persistence::{CookieCodec, CookieJar};

/// Stateful handle over the categories and their backing cookie
pub struct CategoryStore<J: CookieJar> {
    data: Collection,
    codec: CookieCodec,
    jar: J,
}

impl<J: CookieJar> CategoryStore<J> {
    /// Open the store with the default cookie settings, loading whatever the jar holds
    pub fn open(jar: J) -> Self {
        Self::with_config(jar, StoreConfig::default())
    }

    pub fn with_config(mut jar: J, config: StoreConfig) -> Self {
        let codec = CookieCodec::new(config);
        let data = codec.load(&mut jar);
        Self { data, codec, jar }
    }

    pub fn config(&self) -> &StoreConfig {
        self.codec.config()
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Direct access to the jar, for writers outside the store
    pub fn jar_mut(&mut self) -> &mut J {
        &mut self.jar
    }

    pub fn into_jar(self) -> J {
        self.jar
    }

    /// Replace the in-memory collection with what the cookie holds now
    pub fn reload(&mut self) {
        self.data = self.codec.load(&mut self.jar);
    }

    fn persist(&mut self) {
        if let Err(e) = self.codec.save(&mut self.jar, &self.data) {
            log::error!("Failed to save data to cookie: {}", e);
        }
    }

    fn category_mut(&mut self, category_id: &str) -> DomainResult<&mut CategoryItem> {
        self.data
            .iter_mut()
            .find(|category| category.category_id == category_id)
            .ok_or_else(|| DomainError::NotFound(format!("category {}", category_id)))
    }

    /// Apply `change` to one category and save; false when the category is missing
    /// or `change` fails
    fn mutate_category<T>(
        &mut self,
        category_id: &str,
        change: impl FnOnce(&mut CategoryItem) -> DomainResult<T>,
    ) -> bool {
        match self.category_mut(category_id).and_then(change) {
            Ok(_) => {
                self.persist();
                true
            }
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        }
    }

    // ========================
    // Categories
    // ========================

    /// Append an empty category and return its new ID
    pub fn add_category(&mut self, name: impl Into<String>, color: impl Into<String>) -> String {
        let category = CategoryItem::new(name.into(), color.into());
        let id = category.category_id.clone();
        self.data.push(category);
        self.persist();
        id
    }

    pub fn update_category(&mut self, category_id: &str, name: &str, color: &str) -> bool {
        self.mutate_category(category_id, |category| {
            category.category_name = name.to_string();
            category.category_color = color.to_string();
            Ok(())
        })
    }

    /// Remove a category together with all of its content
    pub fn remove_category_by_id(&mut self, category_id: &str) -> bool {
        match position_by_id(&self.data, category_id) {
            Some(index) => {
                self.data.remove(index);
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn find_category_by_id(&self, category_id: &str) -> Option<&CategoryItem> {
        self.data
            .iter()
            .find(|category| category.category_id == category_id)
    }

    pub fn get_all_categories(&self) -> &[CategoryItem] {
        &self.data
    }

    // ========================
    // Content
    // ========================

    /// Append a new content item to a category
    pub fn add_content_to_category(&mut self, category_id: &str, label: &str, content: &str) -> bool {
        self.mutate_category(category_id, |category| {
            category
                .context
                .push(ContentItem::new(label.to_string(), content.to_string()));
            Ok(())
        })
    }

    pub fn remove_content_from_category(&mut self, category_id: &str, content_id: &str) -> bool {
        self.mutate_category(category_id, |category| category.remove_content(content_id))
    }

    /// Add content by text alone, labeled "Legacy Item"
    #[deprecated(note = "use add_content_to_category")]
    pub fn add_context_to_category(&mut self, category_id: &str, text: &str) -> bool {
        self.add_content_to_category(category_id, LEGACY_LABEL, text)
    }

    /// Remove the first content item whose text matches
    #[deprecated(note = "use remove_content_from_category")]
    pub fn remove_context_from_category(&mut self, category_id: &str, text: &str) -> bool {
        self.mutate_category(category_id, |category| category.remove_content_by_text(text))
    }

    // ========================
    // Whole collection
    // ========================

    /// Drop every category and persist the empty collection
    pub fn clear_all_data(&mut self) {
        self.data.clear();
        self.persist();
    }

    /// Expire the cookie and empty the collection without writing anything back
    pub fn clear_cookie_data(&mut self) {
        match self.codec.clear(&mut self.jar) {
            Ok(()) => log::info!("Cookie data cleared"),
            Err(e) => log::error!("Failed to clear cookie data: {}", e),
        }
        self.data.clear();
    }

    /// Expire the cookie, then write a fresh empty collection
    pub fn reset_cookie_data(&mut self) {
        self.clear_cookie_data();
        self.persist();
        log::info!("Cookie data reset");
    }
}

#[cfg(target_arch = "wasm32")]
impl CategoryStore<crate::persistence::DocumentCookieJar> {
    /// Open the store over the page's `document.cookie`
    pub fn from_document(config: StoreConfig) -> crate::persistence::PersistResult<Self> {
        let jar = crate::persistence::DocumentCookieJar::new()?;
        Ok(Self::with_config(jar, config))
    }
}
