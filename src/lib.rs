//! Breedcache - memoized breed lookups
//!
//! Breedcache wraps any source that resolves a breed name to its sub-breed
//! names with a cache that remembers successful answers and counts how many
//! lookups actually reached the source. Unknown breeds are never cached.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Errors, configuration models and the `BreedSource` port
//! - **Adapters** (`adapters`): The caching decorator and an in-memory breed table
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use breedcache::{BreedSource, CachingBreedSource, StaticBreedSource};
//!
//! let table = StaticBreedSource::from_iter([("husky", vec!["husky type 1"])]);
//! let source = CachingBreedSource::from_source(table);
//!
//! assert_eq!(source.sub_breeds("husky").unwrap(), vec!["husky type 1"]);
//! assert_eq!(source.sub_breeds("husky").unwrap(), vec!["husky type 1"]);
//! assert_eq!(source.calls_made(), 1);
//!
//! assert!(source.sub_breeds("bogus").is_err());
//! assert!(source.sub_breeds("bogus").is_err());
//! assert_eq!(source.calls_made(), 3);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::CachingBreedSource;
pub use adapters::memory::StaticBreedSource;
pub use domain::errors::{BreedError, BreedResult};
pub use domain::models::{Config, LoggingConfig};
pub use domain::ports::{sub_breed_count, BreedSource};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerImpl;
