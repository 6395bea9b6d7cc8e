//! Port trait definitions (Hexagonal Architecture)
//!
//! - BreedSource: resolves a breed name to its sub-breed names
//!
//! Adapters implement these traits so the domain stays independent of
//! where breed data actually comes from.

pub mod breed_source;

pub use breed_source::{sub_breed_count, BreedSource};
