//! `lexis` is a small toolkit for the statistical classification of tokenized text.
//!
//! Documents are bags of tokens, usually stemmed words of short texts like paper abstracts, and
//! every document carries one category label. This crate contains the shared parts of the
//! workspace:
//!
//! * [`Dataset`], a corpus of tokenized documents with labels and optional weights
//! * the [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits implemented by every
//! classifier, and [`ParamGuard`] for checked hyperparameters
//! * [`CrossValidation`], ordered k-fold splitting of a corpus
//! * [`feature_selection`], the information gain of every token and pruning of uninformative ones
//! * [`metrics`], confusion matrices and the scores derived from them
//!
//! The classifiers live in their own crates:
//!
//! | Name | Description |
//! | :--- | :--- |
//! | `lexis-bayes` | Multinomial Naive Bayes with a penalty for words unseen in a class |
//! | `lexis-trees` | Decision stump voting with the most informative words |
//! | `lexis-ensemble` | Multi-class AdaBoost (SAMME) over any weak learner |
//!
//! ## Example
//!
//! ```rust
//! use lexis::prelude::*;
//!
//! let dataset = Dataset::new(
//!     vec![vec!["a", "b"], vec!["b", "c"], vec!["a"], vec!["c"]],
//!     vec!["x", "y", "x", "y"],
//! );
//!
//! for fold in dataset.cross_validation(2)? {
//!     let (train, test) = fold.into_datasets();
//!     assert_eq!(train.nsamples(), 2);
//!     assert_eq!(test.nsamples(), 2);
//! }
//! # Ok::<(), Error>(())
//! ```

pub mod dataset;
pub mod error;
pub mod feature_selection;
mod label_scores;
mod metrics_classification;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{CrossValidation, Dataset, Float, Fold, Label, Token};
pub use error::{Error, Result};
pub use label_scores::LabelScores;
pub use param_guard::ParamGuard;

/// Common metrics functions for classification
pub mod metrics {
    pub use crate::metrics_classification::{ConfusionMatrix, ToConfusionMatrix};
}
