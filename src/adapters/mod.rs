//! Adapters implementing the `BreedSource` port.

pub mod cache;
pub mod memory;
