use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use lexis::{
    dataset::{Dataset, Float, Label, Token},
    error::{Error, Result},
    feature_selection::FeatureCounts,
    traits::*,
    LabelScores,
};
use rand::rngs::SmallRng;
use rand::Rng;

use super::DecisionStumpValidParams;

impl<T: Token, L: Label, F: Float, R: Rng + Clone> Fit<T, L, Error>
    for DecisionStumpValidParams<T, L, F, R>
{
    type Object = DecisionStump<T, L, F, R>;

    /// Fit a decision stump on the weighted documents of `dataset`
    fn fit(&self, dataset: &Dataset<T, L>) -> Result<Self::Object> {
        let counts = FeatureCounts::<T, L, F>::from_dataset(dataset)?;
        let gain = counts.scores();

        let n_kept = (self.ratio() * F::cast(gain.len()))
            .floor()
            .to_usize()
            .unwrap_or(0);

        log::trace!(
            "decision stump keeps {} of {} features",
            n_kept,
            gain.len()
        );
        if n_kept == 0 {
            log::warn!(
                "decision stump keeps no feature of {}, every prediction is a random class",
                gain.len()
            );
        }

        let mut parameters = HashMap::new();
        let mut information_gain = HashMap::new();
        for feature in gain.top(n_kept) {
            let score = gain.get(feature).unwrap_or_else(F::zero);
            information_gain.insert(feature.clone(), score);

            // every document with this feature has zero weight
            let branch = counts.branch_weight(feature);
            if branch <= F::zero() {
                continue;
            }

            let votes = counts
                .class_counts(feature)
                .iter()
                .map(|(class, count)| (counts.classes()[*class].clone(), *count * score / branch))
                .collect::<HashMap<_, _>>();
            parameters.insert(feature.clone(), votes);
        }

        Ok(DecisionStump {
            classes: counts.classes().to_vec(),
            parameters,
            information_gain,
            ratio: self.ratio(),
            rng: Mutex::new(self.rng().clone()),
        })
    }
}

/// A fitted decision stump
///
/// The stump keeps the words of highest information gain. For every kept word `w` and label
/// `c` it stores the vote
///
/// ```text
/// count(w, c) * IG(w) / count(w)
/// ```
///
/// where `count(w, c)` is the weight of documents labeled `c` containing `w` and `count(w)` the
/// weight of all documents containing `w`. A document is classified by summing the votes of its
/// distinct kept words per label. Ties go to the label appearing first in the training targets.
/// Documents without any kept word get a label drawn uniformly from all classes.
///
/// The random number generator of the parameters is cloned into every fitted stump and guarded
/// by a mutex, so predicting only needs a shared reference.
///
/// ### Example
///
/// ```rust
/// use lexis::prelude::*;
/// use lexis_trees::DecisionStump;
///
/// let dataset = Dataset::new(
///     vec![vec!["a", "b"], vec!["b", "c"], vec!["a"]],
///     vec!["x", "y", "x"],
/// );
///
/// let stump = DecisionStump::<_, _, f64>::params().fit(&dataset)?;
///
/// assert_eq!(stump.predict(&["a"]), "x");
/// assert_eq!(stump.predict(&["c"]), "y");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct DecisionStump<T: Token, L: Label, F: Float, R = SmallRng> {
    classes: Vec<L>,
    parameters: HashMap<T, HashMap<L, F>>,
    information_gain: HashMap<T, F>,
    ratio: F,
    rng: Mutex<R>,
}

impl<T: Token, L: Label, F: Float, R: Rng + Clone> Clone for DecisionStump<T, L, F, R> {
    fn clone(&self) -> Self {
        let rng = self.rng.lock().unwrap_or_else(|e| e.into_inner()).clone();

        DecisionStump {
            classes: self.classes.clone(),
            parameters: self.parameters.clone(),
            information_gain: self.information_gain.clone(),
            ratio: self.ratio,
            rng: Mutex::new(rng),
        }
    }
}

impl<T: Token, L: Label, F: Float, R: Rng> DecisionStump<T, L, F, R> {
    /// Labels in order of their first appearance in the training targets
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Votes of every kept word for the labels it was seen with
    pub fn parameters(&self) -> &HashMap<T, HashMap<L, F>> {
        &self.parameters
    }

    /// Information gain of every kept word
    pub fn information_gain(&self) -> &HashMap<T, F> {
        &self.information_gain
    }

    /// Fraction of the vocabulary this stump was fitted with
    pub fn ratio(&self) -> F {
        self.ratio
    }

    fn scores(&self, document: &[T]) -> LabelScores<L, F> {
        let mut scores = LabelScores::with_labels(self.classes.iter().cloned());

        let mut seen = HashSet::new();
        for token in document.iter().filter(|t| seen.insert(*t)) {
            if let Some(votes) = self.parameters.get(token) {
                for (label, vote) in votes {
                    scores.add(label, *vote);
                }
            }
        }

        scores
    }

    fn random_class<G: Rng>(&self, rng: &mut G) -> L {
        // fitting fails on empty datasets, there is always a class
        let idx = rng.gen_range(0..self.classes.len());
        self.classes[idx].clone()
    }

    /// Predict with an external random number generator for the fallback
    pub fn predict_with_rng<G: Rng>(&self, document: &[T], rng: &mut G) -> L {
        match self.scores(document).into_best() {
            Some(label) => label,
            None => self.random_class(rng),
        }
    }
}

impl<T: Token, L: Label, F: Float, R: Rng> Predict<T, L> for DecisionStump<T, L, F, R> {
    fn predict(&self, document: &[T]) -> L {
        match self.scores(document).into_best() {
            Some(label) => label,
            None => {
                let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
                self.random_class(&mut *rng)
            }
        }
    }
}
