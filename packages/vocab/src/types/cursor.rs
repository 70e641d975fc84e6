//! Opaque feed cursor.

use serde::{Deserialize, Serialize};

/// Marks the most recently processed post so subsequent polls skip it.
///
/// The value is opaque to the library; each feed implementation decides
/// what it means (a post id, a pagination token, ...). It is always
/// passed explicitly, never held as process-global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
