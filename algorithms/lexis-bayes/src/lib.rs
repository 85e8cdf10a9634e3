#![doc = include_str!("../README.md")]

mod error;
mod hyperparams;
mod naive_bayes;

pub use error::{NaiveBayesError, Result};
pub use hyperparams::{NaiveBayesParams, NaiveBayesValidParams};
pub use naive_bayes::NaiveBayes;
