use thiserror::Error;

/// Simplified `Result` using [`NaiveBayesError`](crate::NaiveBayesError) as error type
pub type Result<T> = std::result::Result<T, NaiveBayesError>;

/// Error variants from hyper-parameter construction or model estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NaiveBayesError {
    /// Invalid penalty for words unseen in a class
    #[error("invalid penalty {0}, should be finite and non-negative")]
    InvalidPenalty(f64),
    #[error(transparent)]
    BaseCrate(#[from] lexis::Error),
}
