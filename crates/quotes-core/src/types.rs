//! Core data types for the quotes service.
//!
//! - A quote is a phrase with an optional attributed speaker (`quotee`)
//! - Quote identity is an opaque string assigned once at creation
//! - Users are owned by the authentication layer; the rest of the system only
//!   cares whether one is present
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a quote.
///
/// The value is opaque: the store assigns it and nothing parses it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    /// Wraps an existing identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the id and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uuid> for QuoteId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}

impl From<String> for QuoteId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for QuoteId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a user known to the authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Quote
// ============================================================================

/// A stored quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store key, never reassigned after creation.
    pub id: QuoteId,
    /// The quoted text.
    pub phrase: String,
    /// Who said it, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotee: Option<String>,
}

impl Quote {
    /// Builds a quote from creation input and a freshly assigned id.
    #[must_use]
    pub fn from_new(id: QuoteId, new: NewQuote) -> Self {
        Self {
            id,
            phrase: new.phrase,
            quotee: new.quotee,
        }
    }

    /// Applies a patch in place. The id is never touched.
    pub fn apply(&mut self, patch: QuotePatch) {
        if let Some(phrase) = patch.phrase {
            self.phrase = phrase;
        }
        if let Some(quotee) = patch.quotee {
            self.quotee = quotee;
        }
    }
}

/// Input for creating a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub phrase: String,
    #[serde(default)]
    pub quotee: Option<String>,
}

impl NewQuote {
    /// Creates creation input with an optional quotee.
    #[must_use]
    pub fn new(phrase: impl Into<String>, quotee: Option<String>) -> Self {
        Self {
            phrase: phrase.into(),
            quotee,
        }
    }
}

/// Partial update for an existing quote.
///
/// `None` leaves a field untouched. For `quotee`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotePatch {
    pub phrase: Option<String>,
    pub quotee: Option<Option<String>>,
}

impl QuotePatch {
    /// Returns true if applying this patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrase.is_none() && self.quotee.is_none()
    }
}

// ============================================================================
// User
// ============================================================================

/// A user resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}
