//! Error types in Lexis
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("the number of records ({0}) and targets ({1}) must match")]
    MismatchedShapes(usize, usize),
    #[error("not enough samples to fit a model")]
    NotEnoughSamples,
    #[error("invalid sample weights {0}")]
    InvalidWeights(String),
    /// Models are only obtained by fitting, so no operation of this workspace returns this
    /// variant. It is kept for downstream classifiers built on the `Fit`/`Predict` traits.
    #[error("model has not been fitted")]
    NotFitted,
}
