//! Information gain of document features
//!
//! Scores every token of a corpus by the reduction in label entropy when splitting the
//! documents on the presence of the token. The scores drive the feature selection of the
//! decision stump and the pruning of uninformative words before training.
//!
//! A document contributes once per distinct token, repeated tokens do not increase the counts.
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::dataset::{Dataset, Float, Label, Token};
use crate::error::{Error, Result};

/// Weighted label counts of a corpus, split by feature presence
///
/// Classes and features are kept in order of their first appearance in the corpus. For every
/// feature the weighted count of each co-occurring class is recorded, a class co-occurs with a
/// feature even if all documents linking them have zero weight.
#[derive(Debug, Clone)]
pub struct FeatureCounts<T, L, F> {
    classes: Vec<L>,
    class_weights: Vec<F>,
    total_weight: F,
    features: Vec<T>,
    counts: HashMap<T, Vec<(usize, F)>>,
}

impl<T: Token, L: Label, F: Float> PartialEq for FeatureCounts<T, L, F> {
    fn eq(&self, other: &Self) -> bool {
        self.classes == other.classes
            && self.class_weights == other.class_weights
            && self.total_weight == other.total_weight
            && self.features == other.features
            && self.counts == other.counts
    }
}

impl<T: Token, L: Label, F: Float> FeatureCounts<T, L, F> {
    /// Count a dataset
    ///
    /// Fails if records, targets and weights differ in length, if the weights are invalid or if
    /// the dataset contains no documents.
    pub fn from_dataset(dataset: &Dataset<T, L>) -> Result<Self> {
        dataset.check_shape()?;
        if dataset.is_empty() {
            return Err(Error::NotEnoughSamples);
        }
        dataset.check_weights()?;

        let mut classes: Vec<L> = Vec::new();
        let mut class_weights = Vec::new();
        let mut features = Vec::new();
        let mut counts: HashMap<T, Vec<(usize, F)>> = HashMap::new();

        for (idx, (document, label)) in dataset.iter().enumerate() {
            let weight = F::cast(dataset.weight(idx));

            let class = match classes.iter().position(|c| c == label) {
                Some(class) => class,
                None => {
                    classes.push(label.clone());
                    class_weights.push(F::zero());
                    classes.len() - 1
                }
            };
            class_weights[class] += weight;

            let mut seen = HashSet::new();
            for token in document.iter().filter(|t| seen.insert(*t)) {
                let entry = counts.entry(token.clone()).or_insert_with(|| {
                    features.push(token.clone());
                    Vec::new()
                });

                match entry.iter_mut().find(|(c, _)| *c == class) {
                    Some((_, count)) => *count += weight,
                    None => entry.push((class, weight)),
                }
            }
        }

        let total_weight = class_weights.iter().copied().sum();

        Ok(FeatureCounts {
            classes,
            class_weights,
            total_weight,
            features,
            counts,
        })
    }

    /// Distinct labels in order of first appearance
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    /// Summed document weight of every class, aligned with [`classes`](Self::classes)
    pub fn class_weights(&self) -> &[F] {
        &self.class_weights
    }

    pub fn total_weight(&self) -> F {
        self.total_weight
    }

    /// Distinct features in order of first appearance
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// Weighted counts of the classes co-occurring with `feature`
    ///
    /// Entries are `(class, weight)` pairs, the class indexes into
    /// [`classes`](Self::classes). Unknown features have no entries.
    pub fn class_counts(&self, feature: &T) -> &[(usize, F)] {
        self.counts.get(feature).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Summed weight of all documents containing `feature`
    pub fn branch_weight(&self, feature: &T) -> F {
        self.class_counts(feature).iter().map(|(_, w)| *w).sum()
    }

    /// Entropy of the label distribution in bits
    pub fn entropy(&self) -> F {
        let mut entropy = F::zero();
        for weight in &self.class_weights {
            let ratio = *weight / self.total_weight;
            if ratio > F::zero() {
                entropy -= ratio * ratio.log2();
            }
        }

        entropy
    }

    /// Information gain of a single feature
    ///
    /// Computed as `H + t * b / W + f * (1 - b / W)` where `H` is the label entropy, `W` the
    /// total weight and `b` the weight of documents containing the feature. The branch terms
    /// `t` and `f` sum `r * log2(r)` over the classes co-occurring with the feature, with `r`
    /// the class ratio inside and outside of the branch. Zero ratios and empty branches do not
    /// contribute.
    pub fn information_gain(&self, feature: &T) -> F {
        self.information_gain_with_entropy(feature, self.entropy())
    }

    fn information_gain_with_entropy(&self, feature: &T, entropy: F) -> F {
        let class_counts = self.class_counts(feature);
        let branch = self.branch_weight(feature);

        let mut true_entropy = F::zero();
        if branch > F::zero() {
            for (_, count) in class_counts {
                let ratio = *count / branch;
                if ratio > F::zero() {
                    true_entropy += ratio * ratio.log2();
                }
            }
        }

        let false_total = self.total_weight - branch;
        let mut false_entropy = F::zero();
        if false_total > F::zero() {
            for (class, count) in class_counts {
                let ratio = (self.class_weights[*class] - *count) / false_total;
                if ratio > F::zero() {
                    false_entropy += ratio * ratio.log2();
                }
            }
        }

        let share = branch / self.total_weight;
        entropy + true_entropy * share + false_entropy * (F::one() - share)
    }

    /// Score every feature of the corpus
    pub fn scores(&self) -> InformationGain<T, F> {
        let entropy = self.entropy();
        let scores = self
            .features
            .iter()
            .map(|feature| {
                (
                    feature.clone(),
                    self.information_gain_with_entropy(feature, entropy),
                )
            })
            .collect();

        InformationGain {
            entropy,
            scores,
            order: self.features.clone(),
        }
    }
}

/// Information gain of every feature of a corpus
///
/// Features keep the order of their first appearance in the corpus, rankings are stable with
/// respect to this order.
#[derive(Debug, Clone)]
pub struct InformationGain<T, F> {
    entropy: F,
    scores: HashMap<T, F>,
    order: Vec<T>,
}

impl<T: Token, F: Float> PartialEq for InformationGain<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.entropy == other.entropy && self.order == other.order && self.scores == other.scores
    }
}

impl<T: Token, F: Float> InformationGain<T, F> {
    /// Label entropy of the corpus
    pub fn entropy(&self) -> F {
        self.entropy
    }

    pub fn get(&self, feature: &T) -> Option<F> {
        self.scores.get(feature).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(feature, score)` pairs in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&T, F)> + '_ {
        self.order.iter().map(move |f| (f, self.scores[f]))
    }

    /// Return all features sorted by descending score
    pub fn ranked(&self) -> Vec<(&T, F)> {
        let mut ranked = self.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    /// Return the `n` features with the highest score
    pub fn top(&self, n: usize) -> Vec<&T> {
        self.ranked().into_iter().take(n).map(|(f, _)| f).collect()
    }

    /// Return the lowest scoring `floor(fraction * len)` features, lowest first
    pub fn lowest_fraction(&self, fraction: F) -> Vec<&T> {
        let n = (fraction * F::cast(self.len()))
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(self.len());

        let mut ranked = self.iter().collect::<Vec<_>>();
        ranked.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
        ranked.into_iter().take(n).map(|(f, _)| f).collect()
    }

    pub fn to_map(&self) -> HashMap<T, F> {
        self.scores.clone()
    }

    pub fn into_map(self) -> HashMap<T, F> {
        self.scores
    }
}

/// Compute the information gain of every feature in `dataset`
///
/// Document weights are respected, a dataset without weights counts every document once.
///
/// ```rust
/// use lexis::{Dataset, feature_selection::information_gain};
///
/// let dataset = Dataset::new(
///     vec![vec!["a", "b"], vec!["b", "c"], vec!["a"]],
///     vec!["x", "y", "x"],
/// );
///
/// let gain = information_gain::<_, _, f64>(&dataset)?;
/// assert_eq!(gain.top(1), vec![&"a"]);
/// # Ok::<(), lexis::Error>(())
/// ```
pub fn information_gain<T: Token, L: Label, F: Float>(
    dataset: &Dataset<T, L>,
) -> Result<InformationGain<T, F>> {
    Ok(FeatureCounts::from_dataset(dataset)?.scores())
}

/// Remove the lowest scoring fraction of the vocabulary from every document
///
/// The `floor(fraction * vocabulary size)` features with the lowest information gain are
/// dropped, documents keep their position and the order of their remaining tokens.
pub fn prune_lowest<T: Token, L: Label>(
    dataset: &Dataset<T, L>,
    fraction: f64,
) -> Result<Dataset<T, L>> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::Parameters(format!(
            "fraction of pruned features should lie in [0, 1], but was {}",
            fraction
        )));
    }

    let gain = information_gain::<T, L, f64>(dataset)?;
    let removed = gain
        .lowest_fraction(fraction)
        .into_iter()
        .collect::<HashSet<_>>();

    log::debug!(
        "pruning {} of {} features by information gain",
        removed.len(),
        gain.len()
    );

    Ok(dataset.retain_tokens(|token| !removed.contains(token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn documents() -> Dataset<&'static str, &'static str> {
        Dataset::new(
            vec![vec!["a", "b"], vec!["b", "c"], vec!["a"]],
            vec!["x", "y", "x"],
        )
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<InformationGain<String, f64>>();
        has_autotraits::<FeatureCounts<String, usize, f32>>();
    }

    #[test]
    fn counts_are_presence_only() -> Result<()> {
        let dataset = Dataset::new(vec![vec!["a", "a", "b"], vec!["a"]], vec![0usize, 1]);
        let counts = FeatureCounts::<_, _, f64>::from_dataset(&dataset)?;

        assert_eq!(counts.classes(), &[0, 1]);
        assert_eq!(counts.features(), &["a", "b"]);
        assert_eq!(counts.class_counts(&"a"), &[(0, 1.0), (1, 1.0)]);
        assert_abs_diff_eq!(counts.branch_weight(&"a"), 2.0);
        assert_abs_diff_eq!(counts.branch_weight(&"z"), 0.0);

        Ok(())
    }

    #[test]
    fn information_gain_of_small_corpus() -> Result<()> {
        let gain = information_gain::<_, _, f64>(&documents())?;

        let entropy = 0.9182958340544896;
        assert_abs_diff_eq!(gain.entropy(), entropy, epsilon = 1e-10);
        assert_abs_diff_eq!(gain.get(&"a").unwrap(), entropy, epsilon = 1e-10);
        assert_abs_diff_eq!(gain.get(&"b").unwrap(), entropy - 2. / 3., epsilon = 1e-10);
        assert_abs_diff_eq!(gain.get(&"c").unwrap(), entropy, epsilon = 1e-10);
        assert_eq!(gain.get(&"d"), None);

        Ok(())
    }

    #[test]
    fn information_gain_respects_weights() -> Result<()> {
        let dataset = documents().with_weights(vec![1.0, 1.0, 2.0]);
        let gain = information_gain::<_, _, f64>(&dataset)?;

        // label weights x: 3, y: 1
        let entropy = -(0.75f64 * 0.75f64.log2() + 0.25 * 0.25f64.log2());
        assert_abs_diff_eq!(gain.entropy(), entropy, epsilon = 1e-10);
        assert_abs_diff_eq!(gain.get(&"b").unwrap(), entropy - 0.5, epsilon = 1e-10);

        Ok(())
    }

    #[test]
    fn constant_label_equals_entropy() -> Result<()> {
        let dataset = Dataset::new(vec![vec!["f"], vec!["f", "g"], vec!["f"]], vec![1, 1, 1]);
        let gain = information_gain::<_, _, f64>(&dataset)?;

        assert_abs_diff_eq!(gain.entropy(), 0.0);
        assert!(gain.get(&"f").unwrap().is_finite());
        assert_abs_diff_eq!(gain.get(&"f").unwrap(), gain.entropy());
        assert_abs_diff_eq!(gain.get(&"g").unwrap(), gain.entropy());

        Ok(())
    }

    #[test]
    fn feature_in_every_document() -> Result<()> {
        let dataset = Dataset::new(
            vec![vec!["f", "g"], vec!["f"], vec!["f"], vec!["f"]],
            vec!["x", "y", "x", "y"],
        );
        let gain = information_gain::<_, _, f64>(&dataset)?;

        assert_abs_diff_eq!(gain.entropy(), 1.0);
        // the empty false branch is skipped, the true branch cancels the entropy
        assert_abs_diff_eq!(gain.get(&"f").unwrap(), 0.0, epsilon = 1e-12);

        Ok(())
    }

    #[test]
    fn equal_corpora_compare_equal() -> Result<()> {
        let counts = FeatureCounts::<_, _, f64>::from_dataset(&documents())?;
        assert_eq!(counts, FeatureCounts::from_dataset(&documents())?);
        assert_eq!(counts.scores(), information_gain(&documents())?);

        let weighted = documents().with_weights(vec![1.0, 1.0, 2.0]);
        assert_ne!(counts, FeatureCounts::from_dataset(&weighted)?);
        assert_ne!(counts.scores(), information_gain(&weighted)?);

        Ok(())
    }

    #[test]
    fn ranking_is_stable() -> Result<()> {
        let gain = information_gain::<_, _, f64>(&documents())?;

        let ranked = gain.ranked().into_iter().map(|(f, _)| *f).collect::<Vec<_>>();
        assert_eq!(ranked, vec!["a", "c", "b"]);
        assert_eq!(gain.top(2), vec![&"a", &"c"]);
        assert_eq!(gain.top(10).len(), 3);

        assert_eq!(gain.lowest_fraction(0.34), vec![&"b"]);
        assert_eq!(gain.lowest_fraction(0.3), Vec::<&&str>::new());
        assert_eq!(gain.lowest_fraction(1.0), vec![&"b", &"a", &"c"]);

        Ok(())
    }

    #[test]
    fn prune_lowest_removes_tokens() -> Result<()> {
        let pruned = prune_lowest(&documents(), 0.34)?;

        assert_eq!(pruned.records, vec![vec!["a"], vec!["c"], vec!["a"]]);
        assert_eq!(pruned.targets(), documents().targets());

        assert_eq!(prune_lowest(&documents(), 0.0)?, documents());
        assert!(matches!(
            prune_lowest(&documents(), 1.5),
            Err(Error::Parameters(_))
        ));

        Ok(())
    }

    #[test]
    fn invalid_datasets() {
        let mismatched = Dataset::new(vec![vec!["a"]], vec!["x", "y"]);
        assert_eq!(
            information_gain::<_, _, f64>(&mismatched).err(),
            Some(Error::MismatchedShapes(1, 2))
        );

        let empty = Dataset::<&str, &str>::new(Vec::new(), Vec::new());
        assert_eq!(
            information_gain::<_, _, f64>(&empty).err(),
            Some(Error::NotEnoughSamples)
        );

        let zero = documents().with_weights(vec![0.0; 3]);
        assert!(matches!(
            information_gain::<_, _, f64>(&zero),
            Err(Error::InvalidWeights(_))
        ));
    }
}
