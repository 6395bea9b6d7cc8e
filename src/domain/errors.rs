//! Domain errors for breed lookups.

use thiserror::Error;

/// Errors a breed source can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedError {
    /// The queried breed has no entry in the source.
    #[error("Breed not found: {0}")]
    NotFound(String),

    /// The source failed for a reason other than an unknown breed.
    #[error("Breed source unavailable: {0}")]
    SourceUnavailable(String),
}

impl BreedError {
    /// Whether this is the not-found kind.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type BreedResult<T> = Result<T, BreedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_breed() {
        let err = BreedError::NotFound("bogus".to_string());
        assert_eq!(err.to_string(), "Breed not found: bogus");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_source_unavailable_is_not_not_found() {
        let err = BreedError::SourceUnavailable("connection reset".to_string());
        assert_eq!(err.to_string(), "Breed source unavailable: connection reset");
        assert!(!err.is_not_found());
    }
}
