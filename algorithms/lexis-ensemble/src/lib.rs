//! # Ensemble Learning Algorithms
//!
//! Ensemble methods combine the predictions of several weak classifiers in order to improve the
//! accuracy over a single one of them.
//!
//! ## AdaBoost
//!
//! [`AdaBoost`] fits a sequence of weak learners on reweighted copies of the training corpus.
//! After every round the documents misclassified so far gain weight, so the next learner focuses
//! on them. This crate implements the multi-class variant SAMME: a round with weighted error
//! `err` receives the confidence
//!
//! ```text
//! alpha = ln((1 - err) / err) + ln(K - 1)
//! ```
//!
//! where `K` is the number of classes. A document is classified by the label with the largest
//! sum of confidences over all rounds predicting it.
//!
//! Any hyperparameter set fitting with [`lexis::Error`] can serve as weak learner, the default is
//! the [decision stump](lexis_trees::DecisionStump) of `lexis-trees`.
//!
//! ## Reference
//!
//! * [Zhu et al., Multi-class AdaBoost](https://dept.stat.lsa.umich.edu/~jizhu/pubs/Zhu-SII09.pdf)
//!
//! ## Example
//!
//! ```rust
//! use lexis::prelude::*;
//! use lexis_ensemble::{AdaBoost, Result};
//! use lexis_trees::DecisionStump;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! // "d" appears once under every label, no stump classifies both documents correctly
//! let dataset = Dataset::new(
//!     vec![vec!["a", "b"], vec!["b", "c"], vec!["a"], vec!["c"], vec!["d"], vec!["d"]],
//!     vec!["x", "y", "x", "y", "x", "y"],
//! );
//!
//! let stump = DecisionStump::params_with_rng(SmallRng::seed_from_u64(42)).ratio(1.0);
//! let model = AdaBoost::params()
//!     .weak_learner(stump)
//!     .n_iter(3)
//!     .fit(&dataset)?;
//!
//! assert_eq!(model.alphas().len(), 3);
//! assert_eq!(model.predict(&["a"]), "x");
//! assert_eq!(model.predict(&["b", "c"]), "y");
//! # Result::Ok(())
//! ```
//!
mod adaboost;
mod error;

pub use adaboost::*;
pub use error::{AdaBoostError, Result};
