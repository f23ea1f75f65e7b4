//! In-memory quote store.
//!
//! `QuoteStore` keeps every quote in a map keyed by id plus an insertion
//! order list, so `list()` returns quotes in the order they were first stored.
//! Data lives for the lifetime of the process only.
//!
//! The store is shared behind an `Arc` by the server. Each call takes the
//! lock for its own duration; concurrent writers to the same quote are not
//! coordinated, so the last write wins.

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use quotes_core::{NewQuote, Quote, QuoteId, QuotePatch};

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, UuidGenerator};

#[derive(Default)]
struct Inner {
    quotes: HashMap<QuoteId, Quote>,
    order: Vec<QuoteId>,
}

/// In-memory store for quotes.
pub struct QuoteStore {
    inner: RwLock<Inner>,
    ids: Box<dyn IdGenerator>,
}

impl QuoteStore {
    /// Create an empty store that assigns UUID v4 ids.
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator)
    }

    /// Create an empty store with a custom id generator.
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            ids: Box::new(ids),
        }
    }

    // ========================================================================
    // Primitive Operations
    // ========================================================================

    /// Get a quote by id.
    pub fn get(&self, id: &QuoteId) -> Option<Quote> {
        self.inner.read().quotes.get(id).cloned()
    }

    /// List all quotes in insertion order.
    pub fn list(&self) -> Vec<Quote> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.quotes.get(id).cloned())
            .collect()
    }

    /// Store a quote under `id`.
    ///
    /// Overwriting an existing quote keeps its position in `list()`.
    /// The key must be non-empty and equal to `quote.id`.
    pub fn put(&self, id: QuoteId, quote: Quote) -> StoreResult<()> {
        if id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        if id != quote.id {
            return Err(StoreError::KeyMismatch {
                key: id,
                quote_id: quote.id,
            });
        }

        let mut inner = self.inner.write();
        if inner.quotes.insert(id.clone(), quote).is_none() {
            inner.order.push(id);
        }
        Ok(())
    }

    /// Delete a quote. Returns true iff it existed.
    pub fn delete(&self, id: &QuoteId) -> bool {
        let mut inner = self.inner.write();
        let existed = inner.quotes.remove(id).is_some();
        if existed {
            inner.order.retain(|k| k != id);
        }
        existed
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.inner.read().quotes.len()
    }

    /// Returns true if the store holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // Lifecycle Operations
    // ========================================================================

    /// Create a quote under a freshly generated id and return it.
    pub fn insert(&self, new: NewQuote) -> StoreResult<Quote> {
        let id = self.ids.next_id();
        let quote = Quote::from_new(id.clone(), new);
        self.put(id, quote.clone())?;
        Ok(quote)
    }

    /// Merge `patch` over the quote at `id` and return the result.
    ///
    /// Fields absent from the patch are preserved. The id is never changed.
    pub fn update(&self, id: &QuoteId, patch: QuotePatch) -> StoreResult<Quote> {
        let mut inner = self.inner.write();
        let quote = inner
            .quotes
            .get_mut(id)
            .ok_or_else(|| StoreError::QuoteNotFound(id.clone()))?;
        quote.apply(patch);
        Ok(quote.clone())
    }

    /// Insert each quote in order, returning the stored records.
    pub fn seed<I>(&self, quotes: I) -> StoreResult<Vec<Quote>>
    where
        I: IntoIterator<Item = NewQuote>,
    {
        quotes.into_iter().map(|q| self.insert(q)).collect()
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for QuoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialGenerator;

    fn store() -> QuoteStore {
        QuoteStore::with_generator(SequentialGenerator::new("q"))
    }

    fn new_quote(phrase: &str, quotee: Option<&str>) -> NewQuote {
        NewQuote::new(phrase, quotee.map(str::to_string))
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let store = store();
        let a = store.insert(new_quote("a", None)).unwrap();
        let b = store.insert(new_quote("b", Some("B"))).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.get(&a.id), Some(a));
        assert_eq!(store.get(&b.id), Some(b));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = store();
        let seeded = store
            .seed(vec![
                new_quote("Test 1", Some("Fulano de tal")),
                new_quote("Test 2", Some("Fulano de tal 2")),
                new_quote("Test 3", Some("Fulano de tal 3")),
            ])
            .unwrap();

        assert_eq!(store.list(), seeded);
        let phrases: Vec<_> = store.list().into_iter().map(|q| q.phrase).collect();
        assert_eq!(phrases, vec!["Test 1", "Test 2", "Test 3"]);
    }

    #[test]
    fn test_put_overwrite_keeps_position() {
        let store = store();
        let first = store.insert(new_quote("first", None)).unwrap();
        store.insert(new_quote("second", None)).unwrap();

        let mut replaced = first.clone();
        replaced.phrase = "first again".to_string();
        store.put(first.id.clone(), replaced).unwrap();

        let list = store.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].phrase, "first again");
    }

    #[test]
    fn test_put_rejects_empty_id() {
        let store = store();
        let quote = Quote {
            id: QuoteId::new(""),
            phrase: "x".to_string(),
            quotee: None,
        };
        assert_eq!(store.put(QuoteId::new(""), quote), Err(StoreError::EmptyId));
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_rejects_key_mismatch() {
        let store = store();
        let quote = Quote {
            id: QuoteId::new("a"),
            phrase: "x".to_string(),
            quotee: None,
        };
        let result = store.put(QuoteId::new("b"), quote);
        assert!(matches!(result, Err(StoreError::KeyMismatch { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_reports_existence() {
        let store = store();
        let quote = store.insert(new_quote("gone", None)).unwrap();

        assert!(store.delete(&quote.id));
        assert!(!store.delete(&quote.id));
        assert!(store.get(&quote.id).is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = store();
        let first = store.insert(new_quote("a", None)).unwrap();
        store.delete(&first.id);
        let second = store.insert(new_quote("b", None)).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_merges_and_keeps_id() {
        let store = store();
        let quote = store.insert(new_quote("P", Some("Z"))).unwrap();

        let updated = store
            .update(
                &quote.id,
                QuotePatch {
                    phrase: None,
                    quotee: Some(Some("Y".to_string())),
                },
            )
            .unwrap();

        assert_eq!(updated.id, quote.id);
        assert_eq!(updated.phrase, "P");
        assert_eq!(updated.quotee.as_deref(), Some("Y"));
        assert_eq!(store.get(&quote.id), Some(updated));
    }

    #[test]
    fn test_update_missing_quote() {
        let store = store();
        let missing = QuoteId::new("missing-id");
        let result = store.update(
            &missing,
            QuotePatch {
                phrase: Some("x".to_string()),
                quotee: None,
            },
        );
        assert_eq!(result, Err(StoreError::QuoteNotFound(missing)));
        assert!(store.is_empty());
    }
}
