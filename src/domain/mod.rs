//! Domain layer for breed lookups
//!
//! This module contains the error model, configuration models and the
//! `BreedSource` port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{BreedError, BreedResult};
