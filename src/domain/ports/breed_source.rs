//! Breed source port.

use std::sync::Arc;

use crate::domain::errors::BreedResult;

/// Resolves a breed name to its sub-breed names.
///
/// Lookups are blocking and take `&self`; implementations that keep state
/// between calls use interior mutability.
pub trait BreedSource {
    /// Get the sub-breeds of `breed`, in source order.
    ///
    /// Returns `BreedError::NotFound` carrying `breed` when the breed is unknown.
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>>;
}

impl<S: BreedSource + ?Sized> BreedSource for &S {
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<S: BreedSource + ?Sized> BreedSource for Box<S> {
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<S: BreedSource + ?Sized> BreedSource for Arc<S> {
    fn sub_breeds(&self, breed: &str) -> BreedResult<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

/// Count the sub-breeds of `breed` through any source.
pub fn sub_breed_count<S: BreedSource + ?Sized>(source: &S, breed: &str) -> BreedResult<usize> {
    source.sub_breeds(breed).map(|sub_breeds| sub_breeds.len())
}
