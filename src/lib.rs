//! Copy Helper Store
//!
//! Categorized content items kept in a single browser cookie.
//!
//! Layered architecture:
//! - domain: categories, content items, identifiers
//! - persistence: cookie jars and the codec that validates stored values
//! - store: the CRUD handle the UI holds for the session

pub mod config;
pub mod domain;
pub mod persistence;
mod store;


pub use config::StoreConfig;
pub use domain::{CategoryItem, Collection, ContentItem};
pub use persistence::{CookieCodec, CookieJar, MemoryCookieJar};
pub use store::CategoryStore;

/// Browser setup for the embedding app: panic messages and logs go to the console
#[cfg(target_arch = "wasm32")]
pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::warn!("Logger already installed");
    }
}
