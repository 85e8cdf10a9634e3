use thiserror::Error;

/// Simplified `Result` using [`AdaBoostError`](crate::AdaBoostError) as error type
pub type Result<T> = std::result::Result<T, AdaBoostError>;

/// Error variants from hyper-parameter construction or boosting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdaBoostError {
    /// The weighted error of a round leaves its confidence undefined, this happens when the weak
    /// learner classifies every document correctly or none at all
    #[error("degenerate boosting round {round} with weighted error {error}")]
    DegenerateRound { round: usize, error: f64 },
    /// Boosting needs at least two labels in the training targets
    #[error("the training targets contain a single label")]
    SingleClass,
    #[error(transparent)]
    BaseCrate(#[from] lexis::Error),
}
