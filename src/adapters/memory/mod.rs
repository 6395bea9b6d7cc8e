//! In-memory breed sources.

pub mod static_breed_source;

pub use static_breed_source::StaticBreedSource;
