//! Cookie Codec
//!
//! Turns the collection into a percent-encoded JSON cookie and back.
//!
//! Loading is total: whatever sits in the cookie, the caller gets a valid
//! collection. Values are checked in order and the first failure decides:
//!
//! 1. absent → empty
//! 2. blank after trimming → empty
//! 3. exactly a stringified "no value" (`[object Object]`, `undefined`, `null`) → empty
//! 4. not starting with `[` or `{` → empty, cookie cleared
//! 5. JSON parse error (or undecodable bytes) → empty, cookie cleared
//! 6. JSON that is not an array → empty, cookie kept
//! 7. array with malformed or duplicate records → empty, cookie kept
//!
//! Otherwise the array is the collection.

use chrono::Utc;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::domain::{validate_collection, CategoryItem, Collection};

use super::cookie_jar::{CookieAttributes, CookieJar};
use super::error::{LoadRejection, PersistError, PersistResult};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Stringified empties that other writers are known to leave behind
const SENTINELS: &[&str] = &["[object Object]", "undefined", "null"];

/// Reads and writes the collection cookie
#[derive(Debug, Clone, Default)]
pub struct CookieCodec {
    config: StoreConfig,
}

impl CookieCodec {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Write the whole collection, replacing whatever the cookie held.
    /// Nothing is written when encoding fails.
    pub fn save<J: CookieJar>(&self, jar: &mut J, categories: &[CategoryItem]) -> PersistResult<()> {
        let encoded = encode(categories)?;
        let expires = self.config.expires_at(Utc::now()).ok_or_else(|| {
            PersistError::Encode(format!("expiry of {} days is out of range", self.config.expiry_days))
        })?;
        let attributes = CookieAttributes::new(expires, self.config.path.clone());
        jar.set(&self.config.cookie_name, &encoded, &attributes)?;
        log::debug!(
            "Saved {} categories to cookie {} ({} bytes)",
            categories.len(),
            self.config.cookie_name,
            encoded.len()
        );
        Ok(())
    }

    /// Read the collection, falling back to empty on anything unusable
    pub fn load<J: CookieJar>(&self, jar: &mut J) -> Collection {
        let Some(raw) = jar.get(&self.config.cookie_name) else {
            log::debug!("Cookie {} not present, starting empty", self.config.cookie_name);
            return Collection::new();
        };

        match decode(&raw) {
            Ok(categories) => {
                log::debug!("Loaded {} categories from cookie", categories.len());
                categories
            }
            Err(rejection) => {
                if rejection.clears_slot() {
                    log::error!(
                        "Discarding cookie {}: {} (starts with {:?})",
                        self.config.cookie_name,
                        rejection,
                        preview(&raw)
                    );
                    if let Err(e) = self.clear(jar) {
                        log::error!("Failed to clear corrupt cookie: {}", e);
                    }
                } else {
                    log::warn!("Ignoring cookie {}: {}", self.config.cookie_name, rejection);
                }
                Collection::new()
            }
        }
    }

    /// Expire the cookie immediately
    pub fn clear<J: CookieJar>(&self, jar: &mut J) -> PersistResult<()> {
        jar.remove(&self.config.cookie_name, &self.config.path)
    }
}

/// Serialize and percent-encode a collection
pub fn encode(categories: &[CategoryItem]) -> PersistResult<String> {
    let json = serde_json::to_string(categories).map_err(|e| PersistError::Encode(e.to_string()))?;
    Ok(utf8_percent_encode(&json, URI_COMPONENT).to_string())
}

/// Run a raw cookie value through the validation pipeline
pub fn decode(raw: &str) -> Result<Collection, LoadRejection> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| LoadRejection::Undecodable(e.to_string()))?;
    let text = decoded.trim();

    if text.is_empty() {
        return Err(LoadRejection::Blank);
    }
    let exact: &str = &decoded;
    if SENTINELS.contains(&exact) {
        return Err(LoadRejection::Sentinel(exact.to_string()));
    }
    if !text.starts_with(['[', '{']) {
        return Err(LoadRejection::NotJson);
    }

    let value: Value = serde_json::from_str(text).map_err(|e| LoadRejection::Parse(e.to_string()))?;
    if !value.is_array() {
        return Err(LoadRejection::NotArray(kind_of(&value)));
    }

    let categories: Collection =
        serde_json::from_value(value).map_err(|e| LoadRejection::InvalidRecord(e.to_string()))?;
    validate_collection(&categories).map_err(|e| LoadRejection::InvalidRecord(e.to_string()))?;
    Ok(categories)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn preview(raw: &str) -> String {
    raw.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentItem;
    use crate::persistence::{MemoryCookieJar, ReadOnlyCookieJar};

    const NAME: &str = "copy-helper-categories";

    fn sample() -> Collection {
        let mut work = CategoryItem::new("Work".to_string(), "#ff0000".to_string());
        work.context.push(ContentItem::new("Note".to_string(), "hello; world = 100%".to_string()));
        work.context.push(ContentItem::new("中文".to_string(), "line\nbreak \"quoted\"".to_string()));
        let home = CategoryItem::new("Home".to_string(), "#00ff00".to_string());
        vec![work, home]
    }

    fn jar_with(raw: &str) -> MemoryCookieJar {
        let mut jar = MemoryCookieJar::new();
        jar.insert_raw(NAME, raw);
        jar
    }

    #[test]
    fn test_encode_matches_encode_uri_component() {
        assert_eq!(encode(&[]).unwrap(), "%5B%5D");
        let category = CategoryItem {
            category_name: "a b(c)'*~!".to_string(),
            category_id: "cat_1".to_string(),
            category_color: "#fff".to_string(),
            context: vec![],
        };
        let encoded = encode(&[category]).unwrap();
        assert!(encoded.contains("a%20b(c)'*~!"));
        assert!(encoded.contains("%23fff"));
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(' '));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let codec = CookieCodec::default();
        let mut jar = MemoryCookieJar::new();
        let categories = sample();

        codec.save(&mut jar, &categories).unwrap();
        assert_eq!(codec.load(&mut jar), categories);
    }

    #[test]
    fn test_save_sets_expiry_and_path() {
        let codec = CookieCodec::default();
        let mut jar = MemoryCookieJar::new();
        codec.save(&mut jar, &sample()).unwrap();

        let attributes = jar.attributes(NAME).unwrap();
        assert_eq!(attributes.path, "/");
        let days = (attributes.expires - Utc::now()).num_days();
        assert!((364..=365).contains(&days));
    }

    #[test]
    fn test_load_is_idempotent() {
        let codec = CookieCodec::default();
        let mut jar = MemoryCookieJar::new();
        codec.save(&mut jar, &sample()).unwrap();

        let first = codec.load(&mut jar);
        let second = codec.load(&mut jar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_absent_cookie_is_empty() {
        let codec = CookieCodec::default();
        let mut jar = MemoryCookieJar::new();
        assert!(codec.load(&mut jar).is_empty());
    }

    #[test]
    fn test_blank_and_sentinel_values_are_empty_and_kept() {
        let codec = CookieCodec::default();
        for raw in ["%20%20", "undefined", "null", "%5Bobject%20Object%5D", "[object Object]"] {
            let mut jar = jar_with(raw);
            assert!(codec.load(&mut jar).is_empty(), "{raw}");
            assert!(jar.contains(NAME), "{raw} should not be cleared");
        }
    }

    #[test]
    fn test_padded_sentinel_is_treated_as_garbage() {
        let codec = CookieCodec::default();
        let mut jar = jar_with("%20undefined%20");
        assert!(codec.load(&mut jar).is_empty());
        assert!(!jar.contains(NAME));
        assert_eq!(decode(" null "), Err(LoadRejection::NotJson));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let codec = CookieCodec::default();
        let mut jar = ReadOnlyCookieJar::default();
        jar.inner.insert_raw(NAME, "%5B%5D");

        let err = codec.save(&mut jar, &sample()).unwrap_err();
        assert!(matches!(err, PersistError::Storage(_)));
        assert_eq!(jar.get(NAME), Some("%5B%5D".to_string()));
    }

    #[test]
    fn test_out_of_range_expiry_skips_write() {
        let codec = CookieCodec::new(StoreConfig::default().with_expiry_days(u32::MAX));
        let mut jar = jar_with("%5B%5D");

        let err = codec.save(&mut jar, &sample()).unwrap_err();
        assert!(matches!(err, PersistError::Encode(_)));
        assert_eq!(jar.get(NAME), Some("%5B%5D".to_string()));
    }

    #[test]
    fn test_non_json_is_cleared() {
        let codec = CookieCodec::default();
        let mut jar = jar_with("not%20json");
        assert!(codec.load(&mut jar).is_empty());
        assert!(!jar.contains(NAME));
    }

    #[test]
    fn test_parse_failure_is_cleared() {
        let codec = CookieCodec::default();
        let mut jar = jar_with("%5B%7B%22category_name%22");
        assert!(codec.load(&mut jar).is_empty());
        assert!(!jar.contains(NAME));
    }

    #[test]
    fn test_invalid_utf8_is_cleared() {
        let codec = CookieCodec::default();
        let mut jar = jar_with("%5B%FF%5D");
        assert!(codec.load(&mut jar).is_empty());
        assert!(!jar.contains(NAME));
    }

    #[test]
    fn test_object_is_rejected_but_kept() {
        let codec = CookieCodec::default();
        let mut jar = jar_with("%7B%7D");
        assert!(codec.load(&mut jar).is_empty());
        assert_eq!(jar.get(NAME), Some("%7B%7D".to_string()));
    }

    #[test]
    fn test_malformed_records_fail_closed() {
        assert!(matches!(
            decode("[1,2,3]"),
            Err(LoadRejection::InvalidRecord(_))
        ));
        assert!(matches!(
            decode(r##"[{"category_name":"A","category_id":"cat_1","category_color":"#000"}]"##),
            Err(LoadRejection::InvalidRecord(_))
        ));

        let codec = CookieCodec::default();
        let mut jar = jar_with("%5B1%5D");
        assert!(codec.load(&mut jar).is_empty());
        assert!(jar.contains(NAME));
    }

    #[test]
    fn test_duplicate_category_ids_fail_closed() {
        let raw = r##"[
            {"category_name":"A","category_id":"cat_1","category_color":"#000","context":[]},
            {"category_name":"B","category_id":"cat_1","category_color":"#fff","context":[]}
        ]"##;
        assert!(matches!(decode(raw), Err(LoadRejection::InvalidRecord(_))));
    }

    #[test]
    fn test_decode_accepts_unencoded_and_padded_json() {
        let raw = r##"  [{"category_name":"A","category_id":"cat_1","category_color":"#000","context":[
            {"id":"content_1","label":"L","content":"C","createdAt":"2024-01-01T00:00:00.000Z"}
        ]}]  "##;
        let categories = decode(raw).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].context[0].created_at, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_decode_classifies_rejections() {
        assert_eq!(decode("   "), Err(LoadRejection::Blank));
        assert_eq!(decode("undefined"), Err(LoadRejection::Sentinel("undefined".to_string())));
        assert_eq!(decode("not json"), Err(LoadRejection::NotJson));
        assert_eq!(decode("{}"), Err(LoadRejection::NotArray("an object")));
        assert!(matches!(decode("[oops"), Err(LoadRejection::Parse(_))));
    }

    #[test]
    fn test_clear_removes_cookie() {
        let codec = CookieCodec::default();
        let mut jar = MemoryCookieJar::new();
        codec.save(&mut jar, &sample()).unwrap();
        codec.clear(&mut jar).unwrap();
        assert!(!jar.contains(NAME));
    }

    #[test]
    fn test_custom_cookie_name() {
        let codec = CookieCodec::new(StoreConfig::default().with_cookie_name("other"));
        let mut jar = MemoryCookieJar::new();
        codec.save(&mut jar, &sample()).unwrap();
        assert!(jar.contains("other"));
        assert!(!jar.contains(NAME));
    }
}
