//! Wire types shared between the designs backend and panel state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque design identifier, unique per user.
///
/// Backends disagree on whether ids are strings or integers; both decode to
/// the same textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDesignId", into = "String")]
pub struct DesignId(String);

impl DesignId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DesignId> for String {
    fn from(id: DesignId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDesignId {
    Text(String),
    Number(i64),
}

impl From<RawDesignId> for DesignId {
    fn from(raw: RawDesignId) -> Self {
        match raw {
            RawDesignId::Text(s) => Self(s),
            RawDesignId::Number(n) => Self(n.to_string()),
        }
    }
}

/// A saved design as listed by `/get-user-designs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    pub design_id: DesignId,
    #[serde(default)]
    pub name: String,
    /// Preview image URL (or data URL).
    #[serde(default)]
    pub preview: String,
}

/// Response envelope for `GET /get-user-designs`.
#[derive(Debug, Deserialize)]
pub struct DesignListResponse {
    pub data: Vec<Design>,
}

/// Identity-provider profile of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}
