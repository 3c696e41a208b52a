//! Persistence Errors
//!
//! `PersistError` covers writes that did not happen. `LoadRejection` says why a
//! stored value was thrown away and whether the slot has to be wiped.

/// Result type for cookie writes
pub type PersistResult<T> = Result<T, PersistError>;

/// A save or clear that could not be carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The collection could not be serialized
    Encode(String),
    /// The cookie storage refused the write or is not reachable
    Storage(String),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Encode(msg) => write!(f, "Encode error: {}", msg),
            PersistError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for PersistError {}

/// Reason a stored value was discarded in favor of an empty collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRejection {
    /// Empty or whitespace only
    Blank,
    /// A stringified "no value" left behind by a careless writer
    Sentinel(String),
    /// Percent-decoding did not yield UTF-8
    Undecodable(String),
    /// Does not start like a JSON array or object
    NotJson,
    /// Looked like JSON but failed to parse
    Parse(String),
    /// Valid JSON, but not an array
    NotArray(&'static str),
    /// An array whose records are missing fields or break uniqueness
    InvalidRecord(String),
}

impl LoadRejection {
    /// Garbage that can never become valid is wiped from the slot. Well-formed
    /// JSON of the wrong shape is left for whoever wrote it.
    pub fn clears_slot(&self) -> bool {
        matches!(
            self,
            LoadRejection::Undecodable(_) | LoadRejection::NotJson | LoadRejection::Parse(_)
        )
    }
}

impl std::fmt::Display for LoadRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadRejection::Blank => write!(f, "value is empty"),
            LoadRejection::Sentinel(value) => write!(f, "value is the sentinel {:?}", value),
            LoadRejection::Undecodable(msg) => write!(f, "value is not valid UTF-8: {}", msg),
            LoadRejection::NotJson => write!(f, "value does not look like JSON"),
            LoadRejection::Parse(msg) => write!(f, "JSON parse error: {}", msg),
            LoadRejection::NotArray(kind) => write!(f, "expected an array, found {}", kind),
            LoadRejection::InvalidRecord(msg) => write!(f, "invalid record: {}", msg),
        }
    }
}

impl std::error::Error for LoadRejection {}
