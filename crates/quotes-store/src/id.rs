//! Identity generation for new quotes.
//!
//! Ids are unique within the process lifetime and never reused, even after
//! the quote they named is deleted. No ordering is promised.

use std::sync::atomic::{AtomicU64, Ordering};

use quotes_core::QuoteId;
use uuid::Uuid;

/// Produces fresh quote identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns an id that has never been returned before.
    fn next_id(&self) -> QuoteId;
}

/// Random UUID v4 ids. The default for the server.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> QuoteId {
        QuoteId::from(Uuid::new_v4())
    }
}

/// Deterministic `<prefix>-<n>` ids, counting from 1.
#[derive(Debug)]
pub struct SequentialGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialGenerator {
    /// Creates a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new("quote")
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&self) -> QuoteId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        QuoteId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_uuid_generator_unique() {
        let generator = UuidGenerator;
        let ids: HashSet<_> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_uuid_generator_parses_as_uuid() {
        let id = UuidGenerator.next_id();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_sequential_generator_counts_from_one() {
        let generator = SequentialGenerator::new("q");
        assert_eq!(generator.next_id().as_str(), "q-1");
        assert_eq!(generator.next_id().as_str(), "q-2");
        assert_eq!(generator.next_id().as_str(), "q-3");
    }
}
