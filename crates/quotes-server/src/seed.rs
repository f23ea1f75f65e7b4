//! Sample quotes loaded at startup when `SEED_QUOTES` is on.

use quotes_core::NewQuote;

/// The three sample quotes, in insertion order.
pub fn sample_quotes() -> Vec<NewQuote> {
    vec![
        NewQuote::new("Test 1", Some("Fulano de tal".to_string())),
        NewQuote::new("Test 2", Some("Fulano de tal 2".to_string())),
        NewQuote::new("Test 3", Some("Fulano de tal 3".to_string())),
    ]
}
