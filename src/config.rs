//! Store Configuration
//!
//! Where the collection lives: cookie name, lifetime, and path scope.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COOKIE_NAME: &str = "copy-helper-categories";
pub const DEFAULT_EXPIRY_DAYS: u32 = 365;
pub const DEFAULT_COOKIE_PATH: &str = "/";

/// Settings for the backing cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name of the single cookie holding the collection
    pub cookie_name: String,
    /// Days from each write until the cookie expires
    pub expiry_days: u32,
    /// Path attribute, `/` covers the whole application
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            expiry_days: DEFAULT_EXPIRY_DAYS,
            path: DEFAULT_COOKIE_PATH.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_expiry_days(mut self, days: u32) -> Self {
        self.expiry_days = days;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Expiry instant for a cookie written at `now`, `None` past the last representable date
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        TimeDelta::try_days(i64::from(self.expiry_days))
            .and_then(|lifetime| now.checked_add_signed(lifetime))
    }
}
