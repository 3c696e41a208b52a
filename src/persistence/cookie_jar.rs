//! Cookie Jar - Core Trait
//!
//! Abstracts the single storage slot the store writes to. Values passed in and
//! out are the raw cookie text, already percent-encoded.

use chrono::{DateTime, Utc};

use super::error::PersistResult;

/// HTTP date format used by the `expires` attribute
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Attributes written alongside a cookie value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub expires: DateTime<Utc>,
    pub path: String,
}

impl CookieAttributes {
    pub fn new(expires: DateTime<Utc>, path: impl Into<String>) -> Self {
        Self {
            expires,
            path: path.into(),
        }
    }

    /// Attributes that make the browser drop the cookie at once
    pub fn expired(path: impl Into<String>) -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH, path)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

/// Storage for named cookie values
pub trait CookieJar {
    /// Raw value of the named cookie, or `None` when absent or empty
    fn get(&self, name: &str) -> Option<String>;

    /// Write a raw value with the given attributes
    fn set(&mut self, name: &str, value: &str, attributes: &CookieAttributes) -> PersistResult<()>;

    /// Expire the named cookie immediately
    fn remove(&mut self, name: &str, path: &str) -> PersistResult<()> {
        self.set(name, "", &CookieAttributes::expired(path))
    }
}

/// Serialize a cookie the way it is assigned to `document.cookie`
pub fn format_cookie(name: &str, value: &str, attributes: &CookieAttributes) -> String {
    format!(
        "{}={}; expires={}; path={}",
        name,
        value,
        attributes.expires.format(EXPIRES_FORMAT),
        attributes.path
    )
}

/// Pick one cookie out of a `document.cookie` style string (`a=1; b=2`).
///
/// The name must occur exactly once; an empty value counts as absent.
pub fn find_cookie<'a>(cookie_string: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("; {}=", name);
    let haystack = format!("; {}", cookie_string);
    let mut matches = haystack.match_indices(&needle);
    let (start, _) = matches.next()?;
    if matches.next().is_some() {
        return None;
    }
    // `haystack` is `cookie_string` shifted right by the two-byte "; " prefix
    let value_start = start + needle.len() - 2;
    let rest = &cookie_string[value_start..];
    let value = rest.split(';').next().unwrap_or_default();
    (!value.is_empty()).then_some(value)
}
