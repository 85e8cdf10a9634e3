use lexis::{
    dataset::{Dataset, Label, Token},
    error::Error,
    traits::*,
    LabelScores,
};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::AdaBoostValidParams;
use crate::error::{AdaBoostError, Result};

impl<T, L, P> Fit<T, L, AdaBoostError> for AdaBoostValidParams<P>
where
    T: Token,
    L: Label,
    P: Fit<T, L, Error>,
    P::Object: Predict<T, L>,
{
    type Object = AdaBoost<P::Object, L>;

    /// Boost the weak learner for `n_iter` rounds on `dataset`
    ///
    /// Sample weights of `dataset` are ignored, boosting starts from uniform weights.
    fn fit(&self, dataset: &Dataset<T, L>) -> Result<Self::Object> {
        dataset.check_shape()?;
        if dataset.is_empty() {
            return Err(Error::NotEnoughSamples.into());
        }

        let classes = dataset.labels();
        if classes.len() < 2 {
            return Err(AdaBoostError::SingleClass);
        }
        let n_classes = classes.len();

        let nsamples = dataset.nsamples();
        let mut weights = vec![1.0 / nsamples as f64; nsamples];
        let mut data = dataset.clone();

        let mut classifiers = Vec::with_capacity(self.n_iter());
        let mut alphas = Vec::with_capacity(self.n_iter());
        let mut errors = Vec::with_capacity(self.n_iter());
        for round in 0..self.n_iter() {
            data = data.with_weights(weights.clone());
            let model = self.weak_learner().fit(&data)?;

            let missed = data
                .iter()
                .map(|(document, target)| model.predict(document) != *target)
                .collect::<Vec<_>>();

            let error: f64 = weights
                .iter()
                .zip(&missed)
                .filter(|(_, missed)| **missed)
                .map(|(weight, _)| weight)
                .sum();
            let alpha = ((1.0 - error) / error).ln() + ((n_classes - 1) as f64).ln();

            log::debug!(
                "boosting round {} with weighted error {:.6} and alpha {:.6}",
                round,
                error,
                alpha
            );

            if !(error > 0.0 && error < 1.0) || !alpha.is_finite() {
                return Err(AdaBoostError::DegenerateRound { round, error });
            }

            let boost = alpha.exp();
            for (weight, missed) in weights.iter_mut().zip(&missed) {
                if *missed {
                    *weight *= boost;
                }
            }
            let total: f64 = weights.iter().sum();
            weights.iter_mut().for_each(|weight| *weight /= total);

            classifiers.push(model);
            alphas.push(alpha);
            errors.push(error);
        }

        Ok(AdaBoost {
            classes,
            classifiers,
            alphas,
            errors,
        })
    }
}

/// A boosted ensemble of weak classifiers
///
/// The `i`-th classifier, its confidence `alphas()[i]` and its weighted training error
/// `errors()[i]` stem from the same boosting round. A document is classified by summing the
/// confidences of all rounds per predicted label, ties go to the label appearing first in the
/// training targets.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct AdaBoost<M, L> {
    classes: Vec<L>,
    classifiers: Vec<M>,
    alphas: Vec<f64>,
    errors: Vec<f64>,
}

impl<M, L> AdaBoost<M, L> {
    /// Labels in order of their first appearance in the training targets
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Weak classifiers in the order of their boosting rounds
    pub fn classifiers(&self) -> &[M] {
        &self.classifiers
    }

    /// Confidence of every round
    pub fn alphas(&self) -> &[f64] {
        &self.alphas
    }

    /// Weighted training error of every round
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }
}

impl<T, L: Label, M: Predict<T, L>> Predict<T, L> for AdaBoost<M, L> {
    fn predict(&self, document: &[T]) -> L {
        let mut scores = LabelScores::with_labels(self.classes.iter().cloned());
        for (classifier, alpha) in self.classifiers.iter().zip(&self.alphas) {
            scores.add(&classifier.predict(document), *alpha);
        }

        // fitting runs at least one round on at least two classes
        scores
            .into_best()
            .unwrap_or_else(|| self.classes[0].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdaBoostParams;

    use approx::assert_abs_diff_eq;
    use lexis::ParamGuard;
    use lexis_trees::{DecisionStump, DecisionStumpParams};
    use rand::{rngs::SmallRng, SeedableRng};

    /// "d" is seen once with every label, no stump fits both of its documents
    fn conflicting() -> Dataset<&'static str, &'static str> {
        Dataset::new(
            vec![
                vec!["a", "b"],
                vec!["b", "c"],
                vec!["a"],
                vec!["c"],
                vec!["d"],
                vec!["d"],
            ],
            vec!["x", "y", "x", "y", "x", "y"],
        )
    }

    fn stump() -> DecisionStumpParams<&'static str, &'static str, f64, SmallRng> {
        DecisionStump::params_with_rng(SmallRng::seed_from_u64(42)).ratio(1.0)
    }

    /// Predicts the label of highest total weight for every document
    struct Majority;

    struct MajorityClassifier<L>(L);

    impl<T: Token, L: Label> Fit<T, L, Error> for Majority {
        type Object = MajorityClassifier<L>;

        fn fit(&self, dataset: &Dataset<T, L>) -> lexis::Result<Self::Object> {
            let freqs = dataset.label_frequencies();
            let mut scores = LabelScores::new();
            for label in dataset.labels() {
                scores.set(&label, freqs[&label]);
            }

            scores
                .into_best()
                .map(MajorityClassifier)
                .ok_or(Error::NotEnoughSamples)
        }
    }

    impl<T, L: Clone> Predict<T, L> for MajorityClassifier<L> {
        fn predict(&self, _document: &[T]) -> L {
            self.0.clone()
        }
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<AdaBoost<DecisionStump<String, String, f64>, String>>();
        has_autotraits::<AdaBoostValidParams<DecisionStumpParams<String, usize, f64, SmallRng>>>();
        has_autotraits::<AdaBoostParams<DecisionStumpParams<u32, bool, f32, SmallRng>>>();
    }

    #[test]
    fn rounds_in_lock_step() -> Result<()> {
        let model = AdaBoostParams::new(stump()).n_iter(3).fit(&conflicting())?;

        assert_eq!(model.classes(), &["x", "y"]);
        assert_eq!(model.n_classes(), 2);
        assert_eq!(model.classifiers().len(), 3);
        assert_eq!(model.alphas().len(), 3);
        assert_eq!(model.errors().len(), 3);

        Ok(())
    }

    #[test]
    fn samme_reweighting() -> Result<()> {
        let model = AdaBoostParams::new(stump()).n_iter(3).fit(&conflicting())?;

        // round 0 misses the last "d", round 1 reweights and misses the first "d", round 2
        // flips back
        let errors = [1. / 6., 1. / 10., 5. / 18.];
        let alphas = [5f64.ln(), 9f64.ln(), (13f64 / 5.).ln()];
        for i in 0..3 {
            assert_abs_diff_eq!(model.errors()[i], errors[i], epsilon = 1e-10);
            assert_abs_diff_eq!(model.alphas()[i], alphas[i], epsilon = 1e-10);
        }

        assert_eq!(model.classifiers()[1].predict(&["d"]), "y");
        // ln(5) + ln(13 / 5) outweighs ln(9)
        assert_eq!(model.predict(&["d"]), "x");
        assert_eq!(model.predict(&["a"]), "x");
        assert_eq!(model.predict(&["b", "c"]), "y");

        Ok(())
    }

    #[test]
    fn single_round_agrees_with_stump() -> Result<()> {
        let dataset = conflicting();
        let model = AdaBoostParams::new(stump()).fit(&dataset)?;
        let single = stump().fit(&dataset)?;

        let expected = vec!["x", "y", "x", "y", "x", "x"];
        assert_eq!(model.predict_dataset(&dataset), expected);
        assert_eq!(single.predict_dataset(&dataset), expected);

        Ok(())
    }

    #[test]
    fn custom_weak_learner() -> Result<()> {
        let dataset = Dataset::new(vec![vec![1u32], vec![2], vec![3]], vec![true, true, false]);
        let model = AdaBoostParams::new(Majority).fit(&dataset)?;

        assert_abs_diff_eq!(model.errors()[0], 1. / 3., epsilon = 1e-10);
        assert_abs_diff_eq!(model.alphas()[0], 2f64.ln(), epsilon = 1e-10);
        assert!(model.predict(&[3u32]));

        Ok(())
    }

    #[test]
    fn input_weights_are_replaced() -> Result<()> {
        let dataset = conflicting();
        let weighted = dataset.clone().with_weights(vec![1., 1., 1., 1., 1., 100.]);

        let model = AdaBoostParams::new(stump()).fit(&weighted)?;
        assert_abs_diff_eq!(model.errors()[0], 1. / 6., epsilon = 1e-10);

        Ok(())
    }

    #[test]
    fn perfect_round_is_degenerate() {
        let dataset = Dataset::new(
            vec![vec!["a", "b"], vec!["b", "c"], vec!["a"]],
            vec!["x", "y", "x"],
        );

        let res = AdaBoost::params().n_iter(5).fit(&dataset);
        assert_eq!(
            res.err(),
            Some(AdaBoostError::DegenerateRound {
                round: 0,
                error: 0.0
            })
        );
    }

    #[test]
    fn single_class() {
        let dataset = Dataset::new(vec![vec!["a"], vec!["b"]], vec!["x", "x"]);
        let res = AdaBoostParams::new(stump()).fit(&dataset);
        assert_eq!(res.err(), Some(AdaBoostError::SingleClass));
    }

    #[test]
    fn invalid_params() {
        let res = AdaBoostParams::new(stump()).n_iter(0).check();
        assert!(matches!(res, Err(Error::Parameters(_))));

        let res = AdaBoostParams::new(stump()).n_iter(0).fit(&conflicting());
        assert!(matches!(
            res,
            Err(AdaBoostError::BaseCrate(Error::Parameters(_)))
        ));

        // invalid weak learners surface on the first round
        let res = AdaBoostParams::new(stump().ratio(0.0)).fit(&conflicting());
        assert!(matches!(
            res,
            Err(AdaBoostError::BaseCrate(Error::Parameters(_)))
        ));
    }

    #[test]
    fn invalid_datasets() {
        let mismatched = Dataset::new(vec![vec!["a"]], vec!["x", "y"]);
        assert_eq!(
            AdaBoostParams::new(stump()).fit(&mismatched).err(),
            Some(AdaBoostError::BaseCrate(Error::MismatchedShapes(1, 2)))
        );

        let empty = Dataset::new(Vec::new(), Vec::new());
        assert_eq!(
            AdaBoostParams::new(stump()).fit(&empty).err(),
            Some(AdaBoostError::BaseCrate(Error::NotEnoughSamples))
        );
    }
}
