use lexis::{
    error::{Error, Result},
    Label, ParamGuard, Token,
};
use lexis_trees::{DecisionStump, DecisionStumpParams};
use rand::rngs::SmallRng;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::AdaBoost;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct AdaBoostValidParams<P> {
    n_iter: usize,
    weak_learner: P,
}

impl<P> AdaBoostValidParams<P> {
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn weak_learner(&self) -> &P {
        &self.weak_learner
    }
}

/// The set of hyperparameters that can be specified for boosting
///
/// `P` are the hyperparameters of the weak learner. Every round fits a fresh weak learner with
/// them on the reweighted training corpus.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [n_iter](Self::n_iter) | `1` | Number of boosting rounds | `[1, inf)` |
/// | [weak_learner](Self::weak_learner) | [`DecisionStumpParams`] | Hyperparameters of every round's weak learner | |
///
/// # Errors
///
/// Checking fails with [`Error::Parameters`] for zero rounds.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct AdaBoostParams<P>(AdaBoostValidParams<P>);

impl<P> AdaBoostParams<P> {
    /// Create a parameter set boosting `weak_learner` for a single round
    pub fn new(weak_learner: P) -> Self {
        Self(AdaBoostValidParams {
            n_iter: 1,
            weak_learner,
        })
    }

    /// Sets the number of boosting rounds
    pub fn n_iter(mut self, n_iter: usize) -> Self {
        self.0.n_iter = n_iter;
        self
    }

    /// Sets the hyperparameters of the weak learner
    pub fn weak_learner(mut self, weak_learner: P) -> Self {
        self.0.weak_learner = weak_learner;
        self
    }
}

impl<P: Default> Default for AdaBoostParams<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<T: Token, L: Label> AdaBoost<DecisionStump<T, L, f64>, L> {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `n_iter = 1`
    /// * `weak_learner = DecisionStump::params()`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> AdaBoostParams<DecisionStumpParams<T, L, f64, SmallRng>> {
        AdaBoostParams::new(DecisionStump::params())
    }
}

impl<P> ParamGuard for AdaBoostParams<P> {
    type Checked = AdaBoostValidParams<P>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.n_iter == 0 {
            Err(Error::Parameters(
                "Number of boosting rounds should be at least one".to_string(),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
