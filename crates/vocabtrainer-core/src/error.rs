//! Training error types.
//!
//! These are the failures a training cycle can run into. File loading and
//! configuration errors are reported through `anyhow` by the parser and
//! config modules instead.

use thiserror::Error;

/// Errors that can occur while running a training cycle.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrainerError {
    /// The session was built without any vocabulary entries.
    #[error("vocabulary is empty, nothing to train")]
    EmptyPool,

    /// The selection policy ran out of unused entries before the cycle ended.
    #[error("no unused entry left: cycle asked for {requested} words but the pool only has {pool_size}")]
    SelectionExhausted { requested: usize, pool_size: usize },

    /// The selection policy returned an index outside the pool.
    #[error("selection returned index {index} but the pool only has {pool_size} entries")]
    InvalidSelection { index: usize, pool_size: usize },

    /// A cycle was requested with zero prompts.
    #[error("cycle length must be at least 1")]
    InvalidCycleLength,

    /// The answer source ended before the cycle was complete.
    #[error("answer input closed after {answered} of {requested} prompts")]
    InputClosed { answered: usize, requested: usize },

    /// Reading an answer failed.
    #[error("failed to read answer: {0}")]
    Input(#[from] std::io::Error),
}

impl TrainerError {
    /// Returns `true` if retrying the same cycle cannot succeed without
    /// changing the vocabulary or the cycle length.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            TrainerError::EmptyPool
                | TrainerError::SelectionExhausted { .. }
                | TrainerError::InvalidSelection { .. }
                | TrainerError::InvalidCycleLength
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_counts() {
        let err = TrainerError::SelectionExhausted {
            requested: 5,
            pool_size: 3,
        };
        assert_eq!(
            err.to_string(),
            "no unused entry left: cycle asked for 5 words but the pool only has 3"
        );

        let err = TrainerError::InputClosed {
            answered: 1,
            requested: 3,
        };
        assert!(err.to_string().contains("1 of 3"));
    }

    #[test]
    fn permanent_classification() {
        assert!(TrainerError::EmptyPool.is_permanent());
        assert!(TrainerError::InvalidCycleLength.is_permanent());
        assert!(TrainerError::InvalidSelection {
            index: 99,
            pool_size: 1
        }
        .is_permanent());
        assert!(!TrainerError::InputClosed {
            answered: 0,
            requested: 1
        }
        .is_permanent());
    }
}
