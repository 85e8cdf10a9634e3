//! Datasets
//!
//! This module implements the dataset struct for tokenized documents and the helper traits
//! bounding tokens, labels and floating point scores.
use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::fmt;
use std::hash::Hash;
use std::iter::Sum;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod cross_validation;
mod impl_dataset;
mod iter;

pub use cross_validation::{CrossValidation, Fold};
pub use iter::Iter;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Probabilities, information gains and
/// boosting confidences of the models are expressed in this type.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + approx::AbsDiffEq
    + 'static
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Document tokens
///
/// Tokens are the features of a document, usually stemmed words. They only need to be
/// comparable and hashable.
pub trait Token: PartialEq + Eq + Hash + Clone {}

impl Token for String {}
impl Token for &str {}
impl Token for char {}
impl Token for usize {}
impl Token for u32 {}
impl Token for u64 {}

/// Discrete labels
///
/// Labels are countable, comparable and hashable. Currently boolean (binary task), integers,
/// characters and strings (multi-class tasks) are supported.
pub trait Label: PartialEq + Eq + Hash + Clone {}

impl Label for bool {}
impl Label for usize {}
impl Label for u32 {}
impl Label for u64 {}
impl Label for i32 {}
impl Label for i64 {}
impl Label for char {}
impl Label for String {}
impl Label for &str {}
impl Label for Option<usize> {}

/// Dataset
///
/// This is the fundamental structure of a dataset. It contains a list of tokenized documents,
/// one label for every document and optional per-document weights.
///
/// # Fields
///
/// * `records`: the documents, each an ordered list of tokens. Duplicated tokens are kept, some
/// models count them and others only look at presence
/// * `targets`: one label per document
/// * `weights`: optional non-negative weight per document, a missing weight vector is treated as
/// uniform weight `1`
///
/// The lengths of the three fields are not enforced on construction. Every fitting routine
/// calls [`check_shape`](Dataset::check_shape) first and fails with
/// [`Error::MismatchedShapes`](crate::Error::MismatchedShapes) instead of truncating.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T, L> {
    pub records: Vec<Vec<T>>,
    pub targets: Vec<L>,

    weights: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use approx::assert_abs_diff_eq;
    use rand::{rngs::SmallRng, SeedableRng};

    fn documents() -> Dataset<&'static str, &'static str> {
        Dataset::new(
            vec![vec!["a", "b"], vec!["b", "c"], vec!["a"], vec!["c", "c"]],
            vec!["x", "y", "x", "z"],
        )
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<Dataset<String, String>>();
        has_autotraits::<Dataset<usize, bool>>();
    }

    #[test]
    fn dataset_implements_required_methods() {
        let dataset = documents();

        assert_eq!(dataset.nsamples(), 4);
        assert_eq!(dataset.labels(), vec!["x", "y", "z"]);
        assert_eq!(dataset.weights(), None);
        assert_eq!(dataset.weight(2), 1.0);
        assert_eq!(dataset.weights_or_uniform(), vec![1.0; 4]);

        let vocabulary = dataset.vocabulary();
        assert_eq!(vocabulary, vec!["a", "b", "c"]);

        let freqs = dataset.label_frequencies();
        assert_abs_diff_eq!(*freqs.get("x").unwrap(), 2.0);
        assert_abs_diff_eq!(*freqs.get("z").unwrap(), 1.0);

        let mapped = dataset.map_targets(|label| *label == "x");
        assert_eq!(mapped.targets(), &[true, false, true, false]);
    }

    #[test]
    fn weighted_label_frequencies() {
        let dataset = documents().with_weights(vec![0.5, 0.25, 0.5, 2.0]);
        let freqs = dataset.label_frequencies();

        assert_abs_diff_eq!(*freqs.get("x").unwrap(), 1.0);
        assert_abs_diff_eq!(*freqs.get("y").unwrap(), 0.25);
        assert_abs_diff_eq!(*freqs.get("z").unwrap(), 2.0);
        assert_abs_diff_eq!(dataset.total_weight(), 3.25);
    }

    #[test]
    fn shape_is_checked() {
        let dataset = Dataset::new(vec![vec!["a"], vec!["b"]], vec!["x"]);
        assert_eq!(dataset.check_shape(), Err(Error::MismatchedShapes(2, 1)));

        let dataset = documents().with_weights(vec![1.0, 1.0]);
        assert_eq!(dataset.check_shape(), Err(Error::MismatchedShapes(4, 2)));

        assert!(documents().check_shape().is_ok());
    }

    #[test]
    fn weights_are_checked() -> Result<()> {
        documents().with_weights(vec![0.0, 1.0, 0.0, 0.0]).check_weights()?;

        let negative = documents().with_weights(vec![-1.0, 1.0, 1.0, 1.0]);
        assert!(matches!(
            negative.check_weights(),
            Err(Error::InvalidWeights(_))
        ));

        let zero = documents().with_weights(vec![0.0; 4]);
        assert!(matches!(zero.check_weights(), Err(Error::InvalidWeights(_))));

        let nan = documents().with_weights(vec![f64::NAN, 1.0, 1.0, 1.0]);
        assert!(matches!(nan.check_weights(), Err(Error::InvalidWeights(_))));

        Ok(())
    }

    #[test]
    fn retain_tokens_keeps_order() {
        let dataset = documents().retain_tokens(|token| *token != "b");

        assert_eq!(
            dataset.records,
            vec![vec!["a"], vec!["c"], vec!["a"], vec!["c", "c"]]
        );
        assert_eq!(dataset.targets(), documents().targets());
    }

    #[test]
    fn iterate_documents() {
        let dataset = documents();
        let pairs = dataset.iter().collect::<Vec<_>>();

        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[1], (&["b", "c"][..], &"y"));
        assert_eq!(pairs[3], (&["c", "c"][..], &"z"));
    }

    #[test]
    fn shuffle_keeps_pairs() {
        let dataset = documents().with_weights(vec![1.0, 2.0, 3.0, 4.0]);
        let mut rng = SmallRng::seed_from_u64(42);
        let shuffled = dataset.shuffle(&mut rng);

        assert_eq!(shuffled.nsamples(), 4);
        for (idx, (document, label)) in shuffled.iter().enumerate() {
            let original = dataset
                .records()
                .iter()
                .position(|d| d.as_slice() == document)
                .unwrap();
            assert_eq!(&dataset.targets()[original], label);
            assert_abs_diff_eq!(shuffled.weight(idx), dataset.weight(original));
        }
    }

    #[test]
    fn datasets_have_k_fold() -> Result<()> {
        let records = (1..=5).map(|i| vec![i]).collect::<Vec<Vec<usize>>>();
        let targets = vec![1usize, 2, 3, 4, 5];
        let dataset = Dataset::new(records, targets);

        let folds = dataset.fold(5)?;
        assert_eq!(folds.len(), 5);

        for (i, (train, val)) in folds.into_iter().enumerate() {
            assert_eq!(val.nsamples(), 1);
            assert_eq!(val.targets()[0], i + 1);
            assert_eq!(train.nsamples(), 4);
            assert!(train.targets().iter().all(|t| *t != i + 1));
        }

        Ok(())
    }
}
