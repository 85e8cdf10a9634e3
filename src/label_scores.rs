//! Ordered label scores
//!
//! Every classifier in this workspace ends with an argmax over per-label scores. The winner of a
//! tie is the label registered first, so scores are kept in registration order instead of a
//! hash map.

use crate::dataset::{Float, Label};

/// Scores of labels in registration order
///
/// A label is either registered without a score (inactive) or carries a score. Only scored
/// labels take part in [`best`](LabelScores::best), ties go to the label registered first.
///
/// ```rust
/// use lexis::LabelScores;
///
/// let mut scores = LabelScores::with_labels(vec!["x", "y", "z"]);
/// scores.add(&"z", 1.0);
/// scores.add(&"y", 1.0);
///
/// assert_eq!(scores.best(), Some(&"y"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScores<L, F> {
    labels: Vec<L>,
    scores: Vec<Option<F>>,
}

impl<L: Label, F: Float> LabelScores<L, F> {
    pub fn new() -> Self {
        LabelScores {
            labels: Vec::new(),
            scores: Vec::new(),
        }
    }

    /// Register labels without scores, this fixes their tie breaking order
    pub fn with_labels<I: IntoIterator<Item = L>>(labels: I) -> Self {
        let mut scores = LabelScores::new();
        for label in labels {
            scores.position_or_register(&label);
        }

        scores
    }

    fn position_or_register(&mut self, label: &L) -> usize {
        match self.labels.iter().position(|l| l == label) {
            Some(idx) => idx,
            None => {
                self.labels.push(label.clone());
                self.scores.push(None);
                self.labels.len() - 1
            }
        }
    }

    /// Add `delta` to the score of `label`, an inactive label starts at zero
    pub fn add(&mut self, label: &L, delta: F) {
        let idx = self.position_or_register(label);
        let score = self.scores[idx].get_or_insert(F::zero());
        *score += delta;
    }

    /// Overwrite the score of `label`
    pub fn set(&mut self, label: &L, value: F) {
        let idx = self.position_or_register(label);
        self.scores[idx] = Some(value);
    }

    pub fn get(&self, label: &L) -> Option<F> {
        self.labels
            .iter()
            .position(|l| l == label)
            .and_then(|idx| self.scores[idx])
    }

    /// Return true if no label carries a score
    pub fn is_empty(&self) -> bool {
        self.scores.iter().all(Option::is_none)
    }

    /// Iterate over scored labels in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&L, F)> + '_ {
        self.labels
            .iter()
            .zip(self.scores.iter())
            .filter_map(|(label, score)| score.map(|s| (label, s)))
    }

    /// Return the scored label with the highest score, the first registered one on ties
    pub fn best(&self) -> Option<&L> {
        self.best_idx().map(|idx| &self.labels[idx])
    }

    /// Consume the scores and return the winning label
    pub fn into_best(mut self) -> Option<L> {
        self.best_idx().map(|idx| self.labels.swap_remove(idx))
    }

    fn best_idx(&self) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (idx, score) in self.scores.iter().enumerate() {
            if let Some(score) = score {
                let better = match best {
                    Some((_, max)) => *score > max,
                    None => true,
                };

                if better {
                    best = Some((idx, *score));
                }
            }
        }

        best.map(|(idx, _)| idx)
    }
}

impl<L: Label, F: Float> Default for LabelScores<L, F> {
    fn default() -> Self {
        LabelScores::new()
    }
}

#[cfg(test)]
mod tests {
    use super::LabelScores;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ties_go_to_first_registered() {
        let mut scores = LabelScores::with_labels(vec!["b", "a", "c"]);
        scores.set(&"c", 2.0);
        scores.set(&"a", 2.0);
        scores.set(&"b", 1.0);

        assert_eq!(scores.best(), Some(&"a"));
    }

    #[test]
    fn inactive_labels_never_win() {
        let mut scores = LabelScores::with_labels(vec!["x", "y"]);
        assert!(scores.is_empty());
        assert_eq!(scores.best(), None);

        // a negative score still beats an unscored label
        scores.add(&"y", -4.0);
        assert!(!scores.is_empty());
        assert_eq!(scores.best(), Some(&"y"));
        assert_eq!(scores.get(&"x"), None);
    }

    #[test]
    fn add_accumulates() {
        let mut scores = LabelScores::new();
        scores.add(&1usize, 0.5f64);
        scores.add(&2, 0.75);
        scores.add(&1, 0.5);

        assert_abs_diff_eq!(scores.get(&1).unwrap(), 1.0);
        assert_eq!(
            scores.iter().map(|(l, _)| *l).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(scores.into_best(), Some(1));
    }

    #[test]
    fn new_labels_are_registered_last() {
        let mut scores = LabelScores::with_labels(vec!['a']);
        scores.set(&'z', 1.0f32);
        scores.set(&'a', 1.0);

        assert_eq!(scores.best(), Some(&'a'));
    }

    #[test]
    fn nan_scores_are_skipped_after_the_first() {
        let mut scores = LabelScores::with_labels(vec![0usize, 1]);
        scores.set(&0, 1.0f64);
        scores.set(&1, f64::NAN);

        assert_eq!(scores.best(), Some(&0));
    }
}
