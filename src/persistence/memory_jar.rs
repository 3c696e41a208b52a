//! In-Memory Cookie Jar
//!
//! Behaves like `document.cookie` for a single path: expired writes delete,
//! reads skip anything past its expiry. Used off the browser and in tests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::cookie_jar::{find_cookie, CookieAttributes, CookieJar};
use super::error::PersistResult;
#[cfg(test)]
use super::error::PersistError;

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    attributes: CookieAttributes,
}

/// Cookie jar held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: BTreeMap<String, StoredCookie>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar seeded with a `document.cookie` style string, as if another script wrote it
    pub fn from_cookie_string(cookie_string: &str) -> Self {
        let mut jar = Self::new();
        for pair in cookie_string.split("; ").filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            jar.insert_raw(name, value);
        }
        jar
    }

    /// Store a value without attributes or encoding, bypassing the codec
    pub fn insert_raw(&mut self, name: &str, value: &str) {
        let attributes = CookieAttributes::new(DateTime::<Utc>::MAX_UTC, "/");
        self.cookies.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                attributes,
            },
        );
    }

    /// Attributes of the live cookie with this name
    pub fn attributes(&self, name: &str) -> Option<&CookieAttributes> {
        self.live(name).map(|cookie| &cookie.attributes)
    }

    /// Whether a live cookie with this name exists, even with an empty value
    pub fn contains(&self, name: &str) -> bool {
        self.live(name).is_some()
    }

    /// All live cookies joined as `name=value; name=value`
    pub fn cookie_string(&self) -> String {
        let now = Utc::now();
        self.cookies
            .iter()
            .filter(|(_, cookie)| !cookie.attributes.is_expired_at(now))
            .map(|(name, cookie)| format!("{}={}", name, cookie.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn live(&self, name: &str) -> Option<&StoredCookie> {
        self.cookies
            .get(name)
            .filter(|cookie| !cookie.attributes.is_expired_at(Utc::now()))
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let cookie_string = self.cookie_string();
        find_cookie(&cookie_string, name).map(str::to_string)
    }

    fn set(&mut self, name: &str, value: &str, attributes: &CookieAttributes) -> PersistResult<()> {
        if attributes.is_expired_at(Utc::now()) {
            self.cookies.remove(name);
        } else {
            self.cookies.insert(
                name.to_string(),
                StoredCookie {
                    value: value.to_string(),
                    attributes: attributes.clone(),
                },
            );
        }
        Ok(())
    }
}

/// Jar whose writes always fail, wrapping readable contents
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ReadOnlyCookieJar {
    pub inner: MemoryCookieJar,
}

#[cfg(test)]
impl CookieJar for ReadOnlyCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.inner.get(name)
    }

    fn set(&mut self, _name: &str, _value: &str, _attributes: &CookieAttributes) -> PersistResult<()> {
        Err(PersistError::Storage("cookies are blocked".to_string()))
    }
}
