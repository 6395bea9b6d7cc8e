//! In-memory breed source backed by a fixed breed table.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::models::Config;
use crate::domain::ports::BreedSource;

/// Breed source serving a fixed table, for local runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticBreedSource {
    breeds: BTreeMap<String, Vec<String>>,
}

impl StaticBreedSource {
    pub const fn new(breeds: BTreeMap<String, Vec<String>>) -> Self {
        Self { breeds }
    }

    /// Build from the configured breed table.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.breeds.clone())
    }

    /// Known breed names, sorted.
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.breeds.keys().map(String::as_str)
    }
}

impl<B, S> FromIterator<(B, Vec<S>)> for StaticBreedSource
where
    B: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (B, Vec<S>)>>(iter: I) -> Self {
        let breeds = iter
            .into_iter()
            .map(|(breed, sub_breeds)| {
                (
                    breed.into(),
                    sub_breeds.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self::new(breeds)
    }
}

impl BreedSource for StaticBreedSource {
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        trace!(breed, "static breed lookup");
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| BreedError::NotFound(breed.to_string()))
    }
}
