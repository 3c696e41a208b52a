//! Persistence Layer
//!
//! Cookie storage abstractions and the codec that validates what comes back out.

mod codec;
mod cookie_jar;
#[cfg(target_arch = "wasm32")]
mod document_jar;
mod error;
mod memory_jar;

pub use codec::{decode, encode, CookieCodec};
pub use cookie_jar::{find_cookie, format_cookie, CookieAttributes, CookieJar};
#[cfg(target_arch = "wasm32")]
pub use document_jar::DocumentCookieJar;
pub use error::{LoadRejection, PersistError, PersistResult};
pub use memory_jar::MemoryCookieJar;
#[cfg(test)]
pub(crate) use memory_jar::ReadOnlyCookieJar;
