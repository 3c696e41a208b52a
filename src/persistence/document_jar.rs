//! Browser Cookie Jar
//!
//! Reads and writes `document.cookie` through web-sys.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::cookie_jar::{find_cookie, format_cookie, CookieAttributes, CookieJar};
use super::error::{PersistError, PersistResult};

/// Cookie jar backed by the page's `document.cookie`
pub struct DocumentCookieJar {
    document: HtmlDocument,
}

impl DocumentCookieJar {
    /// Bind to the current window's document
    pub fn new() -> PersistResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PersistError::Storage("no document available".to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PersistError::Storage("document is not an HTML document".to_string()))?;
        Ok(Self { document })
    }
}

impl CookieJar for DocumentCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let cookie_string = self.document.cookie().ok()?;
        find_cookie(&cookie_string, name).map(str::to_string)
    }

    fn set(&mut self, name: &str, value: &str, attributes: &CookieAttributes) -> PersistResult<()> {
        let cookie = format_cookie(name, value, attributes);
        log::debug!("Cookie string set: {}", cookie);
        self.document
            .set_cookie(&cookie)
            .map_err(|e| PersistError::Storage(format!("{:?}", e)))
    }
}
