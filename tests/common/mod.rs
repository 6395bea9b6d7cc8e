//! Common test utilities for integration tests
//!
//! Provides a recording breed source double shared across test files.

use std::cell::RefCell;
use std::collections::HashMap;

use breedcache::{BreedError, BreedResult, BreedSource};

/// Breed source double with a fixed answer per breed that records every call.
///
/// Breeds without an answer are reported as not found.
#[derive(Default)]
pub struct RecordingBreedSource {
    answers: HashMap<String, BreedResult<Vec<String>>>,
    calls: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingBreedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `breed` with the given sub-breeds.
    pub fn with_breed(mut self, breed: &str, sub_breeds: &[&str]) -> Self {
        self.answers.insert(breed.to_string(), Ok(strings(sub_breeds)));
        self
    }

    /// Answer `breed` with an error.
    pub fn with_error(mut self, breed: &str, error: BreedError) -> Self {
        self.answers.insert(breed.to_string(), Err(error));
        self
    }

    /// Every breed passed to `sub_breeds`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of calls made for exactly `breed`.
    pub fn calls_for(&self, breed: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == breed).count()
    }
}

impl BreedSource for RecordingBreedSource {
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        self.calls.borrow_mut().push(breed.to_string());
        self.answers
            .get(breed)
            .cloned()
            .unwrap_or_else(|| Err(BreedError::NotFound(breed.to_string())))
    }
}

#[allow(dead_code)]
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
