//!
//! # Decision stump learning
//! `lexis-trees` provides a decision stump for tokenized documents, the default weak learner
//! of the boosting ensemble in `lexis-ensemble`.
//!
//! # The big picture
//!
//! `lexis-trees` is a crate in the `lexis` workspace, a toolkit for the statistical
//! classification of short texts.
//!
//! A decision stump ranks all words of the training corpus by their information gain and keeps
//! the most informative ones. Every kept word votes for the labels it was seen with, scaled by
//! its information gain. Document weights enter the counts, which allows boosting.
//!
//! # Current state
//!
//! `lexis-trees` currently provides an [implementation](DecisionStump) of a single-level,
//! multi-word stump for classification.
//!

mod decision_stump;

pub use decision_stump::*;

// Re-export the common Result alias for convenience
pub use lexis::error::Result;
