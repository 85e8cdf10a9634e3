use std::collections::{HashMap, HashSet};

use lexis::dataset::{Dataset, Float, Label, Token};
use lexis::traits::{Fit, Predict};
use lexis::LabelScores;

use crate::error::{NaiveBayesError, Result};
use crate::hyperparams::{NaiveBayesParams, NaiveBayesValidParams};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

impl<T: Token, L: Label, F: Float> Fit<T, L, NaiveBayesError> for NaiveBayesValidParams<T, L, F> {
    type Object = NaiveBayes<T, L, F>;

    /// Estimate priors and smoothed word probabilities
    ///
    /// Every occurrence of a word is counted, document weights are ignored.
    fn fit(&self, dataset: &Dataset<T, L>) -> Result<Self::Object> {
        dataset.check_shape()?;
        if dataset.is_empty() {
            return Err(lexis::Error::NotEnoughSamples.into());
        }

        let classes = dataset.labels();
        let nsamples = F::cast(dataset.nsamples());

        let mut class_prob: HashMap<L, F> = HashMap::new();
        for label in dataset.targets() {
            *class_prob.entry(label.clone()).or_insert_with(F::zero) += F::one();
        }
        for prob in class_prob.values_mut() {
            *prob /= nsamples;
        }

        let mut all_features = HashSet::new();
        let mut feature_prob: HashMap<L, HashMap<T, F>> = HashMap::new();
        for (document, label) in dataset.iter() {
            let counts = feature_prob.entry(label.clone()).or_default();
            for token in document {
                all_features.insert(token.clone());
                *counts.entry(token.clone()).or_insert_with(F::zero) += F::one();
            }
        }

        // Laplace smoothing over the global vocabulary
        let vocabulary_size = F::cast(all_features.len());
        for counts in feature_prob.values_mut() {
            let denominator = counts.values().copied().sum::<F>() + vocabulary_size;
            for count in counts.values_mut() {
                *count = (*count + F::one()) / denominator;
            }
        }

        log::debug!(
            "estimated naive bayes over {} documents, {} classes and {} words",
            dataset.nsamples(),
            classes.len(),
            all_features.len()
        );

        Ok(NaiveBayes {
            classes,
            class_prob,
            feature_prob,
            all_features,
            penalty: self.penalty(),
        })
    }
}

/// Fitted multinomial Naive Bayes classifier
///
/// Scores a document for every label `c` with
///
/// ```text
/// ln P(c) + Σ ln P(w | c)
/// ```
///
/// over the words `w` of the document, repetitions included. A word that is part of the
/// vocabulary but was never seen with `c` contributes `-penalty` instead, unknown words are
/// skipped. The word probabilities are Laplace smoothed with the size of the global
/// vocabulary, `P(w | c) = (count(w, c) + 1) / (Σ count(·, c) + |V|)`.
///
/// The label with the highest score wins, ties go to the label appearing first in the
/// training targets.
///
/// # Example
///
/// ```rust
/// use lexis::prelude::*;
/// use lexis_bayes::{NaiveBayes, Result};
///
/// let dataset = Dataset::new(
///     vec![vec!["goal", "match"], vec!["vote", "party"], vec!["match", "team"]],
///     vec!["sport", "politics", "sport"],
/// );
///
/// let model = NaiveBayes::<_, _, f64>::params().fit(&dataset)?;
///
/// assert_eq!(model.predict(&["team", "goal"]), "sport");
/// assert_eq!(model.predict(&["party"]), "politics");
/// # Result::Ok(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayes<T: Token, L: Label, F: Float> {
    classes: Vec<L>,
    class_prob: HashMap<L, F>,
    feature_prob: HashMap<L, HashMap<T, F>>,
    all_features: HashSet<T>,
    penalty: F,
}

impl<T: Token, L: Label, F: Float> NaiveBayes<T, L, F> {
    /// Construct a new set of hyperparameters
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> NaiveBayesParams<T, L, F> {
        NaiveBayesParams::new()
    }

    /// Labels in order of their first appearance in the training targets
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Prior probability of every label
    pub fn class_prob(&self) -> &HashMap<L, F> {
        &self.class_prob
    }

    /// Smoothed probability of every word seen with a label
    pub fn feature_prob(&self) -> &HashMap<L, HashMap<T, F>> {
        &self.feature_prob
    }

    /// Vocabulary of the training documents
    pub fn all_features(&self) -> &HashSet<T> {
        &self.all_features
    }

    pub fn penalty(&self) -> F {
        self.penalty
    }

    fn scores(&self, document: &[T]) -> LabelScores<L, F> {
        let mut scores = LabelScores::with_labels(self.classes.iter().cloned());

        for label in &self.classes {
            let prior = self.class_prob.get(label).copied().unwrap_or_else(F::zero);
            let probs = self.feature_prob.get(label);

            let mut score = prior.ln();
            for token in document {
                match probs.and_then(|probs| probs.get(token)) {
                    Some(prob) => score += prob.ln(),
                    None if self.all_features.contains(token) => score -= self.penalty,
                    None => {}
                }
            }

            scores.set(label, score);
        }

        scores
    }

    /// Return the log-space score of every label for a document
    ///
    /// The scores are unnormalized joint log likelihoods, with words known to the model but
    /// unseen in a class penalized. Labels are ordered as in [`classes`](Self::classes).
    pub fn joint_log_likelihood(&self, document: &[T]) -> Vec<(L, F)> {
        self.scores(document)
            .iter()
            .map(|(label, score)| (label.clone(), score))
            .collect()
    }
}

impl<T: Token, L: Label, F: Float> Predict<T, L> for NaiveBayes<T, L, F> {
    fn predict(&self, document: &[T]) -> L {
        // a fitted model has at least one class and every class is scored
        match self.scores(document).into_best() {
            Some(label) => label,
            None => self.classes[0].clone(),
        }
    }
}
