//! Shared test helpers for the collection integration tests

#![allow(dead_code)]

use fluent_collections::{CollectionResult, List};
use std::fmt::Debug;

// Re-export testing utilities
pub use pretty_assertions::{assert_eq, assert_ne};

/// Install a test-writer tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`, so `RUST_LOG=fluent_collections=trace cargo test`
/// shows batch aborts and whole-container operations.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert that a result failed with the given error class
pub fn assert_error_kind<T: Debug>(result: CollectionResult<T>, expected: &str) {
    match result {
        Err(e) => assert_eq!(e.kind_name(), expected, "unexpected error: {}", e),
        Ok(value) => panic!("Expected {}, got Ok({:?})", expected, value),
    }
}

/// Assert a list holds exactly `expected`, in order
pub fn assert_items<T>(list: &List<T>, expected: &[T])
where
    T: fluent_collections::Element + Debug,
{
    assert_eq!(list.to_vec().unwrap(), expected.to_vec());
}
