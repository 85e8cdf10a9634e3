use std::marker::PhantomData;

use lexis::{
    error::{Error, Result},
    Float, ParamGuard,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::DecisionStump;

/// The set of hyperparameters that can be specified for fitting a
/// [decision stump](struct.DecisionStump.html).
///
/// ### Example
///
/// ```rust
/// use lexis_trees::DecisionStump;
/// use lexis::prelude::*;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// // Initialize the default set of parameters with a reproducible random fallback
/// let params = DecisionStump::params_with_rng(SmallRng::seed_from_u64(42));
/// // Keep the better half of all words
/// let params = params.ratio(0.5);
///
/// let dataset = Dataset::new(
///     vec![vec!["a", "b"], vec!["b", "c"], vec!["a"], vec!["c", "d"]],
///     vec!["x", "y", "x", "y"],
/// );
/// let stump = params.fit(&dataset)?;
///
/// assert_eq!(stump.parameters().len(), 2);
/// assert_eq!(stump.predict(&["a"]), "x");
/// # Ok::<(), Error>(())
/// ```
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [ratio](Self::ratio) | `0.88` | Fraction of the vocabulary kept, ordered by information gain | `(0, 1]` |
/// | rng | `SmallRng` from entropy | Picks a label for documents without any kept word | |
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionStumpValidParams<T, L, F, R> {
    ratio: F,
    rng: R,

    marker: PhantomData<(T, L)>,
}

impl<T, L, F: Float, R> DecisionStumpValidParams<T, L, F, R> {
    pub fn ratio(&self) -> F {
        self.ratio
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecisionStumpParams<T, L, F, R>(DecisionStumpValidParams<T, L, F, R>);

impl<T, L, F: Float> DecisionStumpParams<T, L, F, SmallRng> {
    pub fn new() -> Self {
        Self::new_with_rng(SmallRng::from_entropy())
    }
}

impl<T, L, F: Float, R: Rng + Clone> DecisionStumpParams<T, L, F, R> {
    pub fn new_with_rng(rng: R) -> Self {
        Self(DecisionStumpValidParams {
            ratio: F::cast(0.88),
            rng,
            marker: PhantomData,
        })
    }

    /// Sets the fraction of the vocabulary which is kept
    ///
    /// The stump keeps the `floor(ratio * vocabulary size)` words of highest information gain.
    pub fn ratio(mut self, ratio: F) -> Self {
        self.0.ratio = ratio;
        self
    }

    /// Sets the random number generator used for documents without any kept word
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> DecisionStumpParams<T, L, F, R2> {
        DecisionStumpParams(DecisionStumpValidParams {
            ratio: self.0.ratio,
            rng,
            marker: PhantomData,
        })
    }
}

impl<T, L, F: Float> Default for DecisionStumpParams<T, L, F, SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L, F: Float> DecisionStump<T, L, F, SmallRng>
where
    T: lexis::Token,
    L: lexis::Label,
{
    /// Defaults are provided if the optional parameters are not specified:
    /// * `ratio = 0.88`
    /// * `rng = SmallRng::from_entropy()`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> DecisionStumpParams<T, L, F, SmallRng> {
        DecisionStumpParams::new()
    }
}

impl<T, L, F: Float, R: Rng + Clone> DecisionStump<T, L, F, R>
where
    T: lexis::Token,
    L: lexis::Label,
{
    /// Same as [`params`](DecisionStump::params) with a given random number generator
    pub fn params_with_rng(rng: R) -> DecisionStumpParams<T, L, F, R> {
        DecisionStumpParams::new_with_rng(rng)
    }
}

impl<T, L, F: Float, R> ParamGuard for DecisionStumpParams<T, L, F, R> {
    type Checked = DecisionStumpValidParams<T, L, F, R>;
    type Error = Error;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let ratio = self.0.ratio;
        if !(ratio > F::zero() && ratio <= F::one()) {
            Err(Error::Parameters(format!(
                "Ratio of kept features should lie in (0, 1], but was {}",
                ratio
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
