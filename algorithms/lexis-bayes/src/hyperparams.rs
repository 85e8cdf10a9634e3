use std::marker::PhantomData;

use lexis::{Float, ParamGuard};

use crate::NaiveBayesError;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified hyper-parameter set ready for the estimation of a Naive Bayes model
///
/// See [`NaiveBayesParams`](crate::NaiveBayesParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesValidParams<T, L, F> {
    penalty: F,
    marker: PhantomData<(T, L)>,
}

impl<T, L, F: Float> NaiveBayesValidParams<T, L, F> {
    /// Get the penalty for words which are known, but unseen in a class
    pub fn penalty(&self) -> F {
        self.penalty
    }
}

/// A hyper-parameter set during construction
///
/// The parameter set can be verified into a
/// [`NaiveBayesValidParams`](crate::NaiveBayesValidParams) by calling
/// [ParamGuard::check](Self::check). It is also possible to directly fit a model with
/// [Fit::fit](lexis::traits::Fit::fit) which implicitely verifies the parameter set prior to
/// the model estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [penalty](Self::penalty) | `18` | Log-space cost of a word known to the model, but never seen with the scored label | `[0, inf)` |
///
/// # Errors
///
/// Returns [`InvalidPenalty`](NaiveBayesError::InvalidPenalty) if the penalty is negative or
/// not finite.
///
/// # Example
///
/// ```rust
/// use lexis::prelude::*;
/// use lexis_bayes::{NaiveBayes, Result};
///
/// let dataset = Dataset::new(
///     vec![vec!["a", "b"], vec!["b", "c"], vec!["a"]],
///     vec!["x", "y", "x"],
/// );
///
/// // create a new parameter set with a penalty of `5`
/// let unchecked_params = NaiveBayes::params().penalty(5.0);
///
/// // fit model with unchecked parameter set
/// let model = unchecked_params.fit(&dataset)?;
///
/// // transform into a verified parameter set, fitting with it only returns
/// // errors originating from the fitting process
/// let checked_params = unchecked_params.check()?;
/// let model = checked_params.fit(&dataset)?;
/// # Result::Ok(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesParams<T, L, F>(NaiveBayesValidParams<T, L, F>);

impl<T, L, F: Float> NaiveBayesParams<T, L, F> {
    /// Create a new parameter set with default values
    pub fn new() -> Self {
        Self(NaiveBayesValidParams {
            penalty: F::cast(18),
            marker: PhantomData,
        })
    }

    /// Set the penalty for words which are known, but unseen in a class
    pub fn penalty(mut self, penalty: F) -> Self {
        self.0.penalty = penalty;
        self
    }
}

impl<T, L, F: Float> Default for NaiveBayesParams<T, L, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L, F: Float> ParamGuard for NaiveBayesParams<T, L, F> {
    type Checked = NaiveBayesValidParams<T, L, F>;
    type Error = NaiveBayesError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let penalty = self.0.penalty;
        if !penalty.is_finite() || penalty < F::zero() {
            Err(NaiveBayesError::InvalidPenalty(
                penalty.to_f64().unwrap_or(f64::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
