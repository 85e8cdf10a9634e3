use std::collections::{HashMap, HashSet};

use rand::{seq::SliceRandom, Rng};

use super::{iter::Iter, CrossValidation, Dataset, Label, Token};
use crate::error::{Error, Result};

impl<T, L> Dataset<T, L> {
    /// Create a new dataset from documents and their labels
    pub fn new(records: Vec<Vec<T>>, targets: Vec<L>) -> Self {
        Dataset {
            records,
            targets,
            weights: None,
        }
    }

    /// Attach one weight to every document
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Drop the weights, all documents count as weight `1` again
    pub fn without_weights(mut self) -> Self {
        self.weights = None;
        self
    }

    pub fn records(&self) -> &[Vec<T>] {
        &self.records
    }

    pub fn targets(&self) -> &[L] {
        &self.targets
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Return the weight of the `idx`th document, `1` if the dataset is unweighted
    pub fn weight(&self, idx: usize) -> f64 {
        self.weights
            .as_ref()
            .and_then(|weights| weights.get(idx).copied())
            .unwrap_or(1.0)
    }

    /// Return the document weights, uniform `1` weights if the dataset is unweighted
    pub fn weights_or_uniform(&self) -> Vec<f64> {
        match &self.weights {
            Some(weights) => weights.clone(),
            None => vec![1.0; self.records.len()],
        }
    }

    pub fn total_weight(&self) -> f64 {
        match &self.weights {
            Some(weights) => weights.iter().sum(),
            None => self.records.len() as f64,
        }
    }

    pub fn nsamples(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(document, label)` pairs
    pub fn iter(&self) -> Iter<'_, T, L> {
        Iter::new(&self.records, &self.targets)
    }

    /// Verify that records, targets and weights agree in length
    pub fn check_shape(&self) -> Result<()> {
        if self.records.len() != self.targets.len() {
            return Err(Error::MismatchedShapes(
                self.records.len(),
                self.targets.len(),
            ));
        }

        match &self.weights {
            Some(weights) if weights.len() != self.records.len() => Err(Error::MismatchedShapes(
                self.records.len(),
                weights.len(),
            )),
            _ => Ok(()),
        }
    }

    /// Verify that all weights are finite, non-negative and sum to a positive value
    pub fn check_weights(&self) -> Result<()> {
        let weights = match &self.weights {
            Some(weights) => weights,
            None => return Ok(()),
        };

        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::InvalidWeights(format!(
                "every weight should be finite and non-negative, but found {}",
                w
            )));
        }

        let sum = weights.iter().sum::<f64>();
        if sum <= 0.0 {
            return Err(Error::InvalidWeights(format!(
                "weights should sum to a positive value, but sum to {}",
                sum
            )));
        }

        Ok(())
    }

    /// Return a copy with the documents in random order
    ///
    /// Records, targets and weights are permuted together. Cross validation cuts contiguous
    /// blocks, so corpora sorted by label should be shuffled first.
    pub fn shuffle<R: Rng>(&self, rng: &mut R) -> Self
    where
        T: Clone,
        L: Clone,
    {
        let mut indices = (0..self.records.len().min(self.targets.len())).collect::<Vec<_>>();
        indices.shuffle(rng);

        Dataset {
            records: indices.iter().map(|i| self.records[*i].clone()).collect(),
            targets: indices.iter().map(|i| self.targets[*i].clone()).collect(),
            weights: self
                .weights
                .as_ref()
                .map(|_| indices.iter().map(|i| self.weight(*i)).collect()),
        }
    }

    /// Apply a function to every target and return the relabeled dataset
    pub fn map_targets<S, G: FnMut(&L) -> S>(self, fnc: G) -> Dataset<T, S> {
        let Dataset {
            records,
            targets,
            weights,
        } = self;

        Dataset {
            records,
            targets: targets.iter().map(fnc).collect(),
            weights,
        }
    }
}

impl<T: Token, L: Label> Dataset<T, L> {
    /// Return the distinct labels in order of their first appearance
    pub fn labels(&self) -> Vec<L> {
        let mut seen = HashSet::new();
        self.targets
            .iter()
            .filter(|label| seen.insert(*label))
            .cloned()
            .collect()
    }

    /// Return the summed document weight of every label
    pub fn label_frequencies(&self) -> HashMap<L, f64> {
        let mut freqs = HashMap::new();
        for (idx, label) in self.targets.iter().enumerate() {
            *freqs.entry(label.clone()).or_insert(0.0) += self.weight(idx);
        }

        freqs
    }

    /// Return the distinct tokens of all documents in order of their first appearance
    pub fn vocabulary(&self) -> Vec<T> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flatten()
            .filter(|token| seen.insert(*token))
            .cloned()
            .collect()
    }

    /// Keep only the tokens for which `keep` returns true, documents and labels stay in place
    pub fn retain_tokens<G: FnMut(&T) -> bool>(&self, mut keep: G) -> Self {
        let records = self
            .records
            .iter()
            .map(|document| document.iter().filter(|t| keep(*t)).cloned().collect())
            .collect();

        Dataset {
            records,
            targets: self.targets.clone(),
            weights: self.weights.clone(),
        }
    }

    /// Create a k-fold cross validation iterator over this dataset
    ///
    /// See [`CrossValidation`] for the partitioning rules.
    pub fn cross_validation(&self, k: usize) -> Result<CrossValidation<'_, T, L>> {
        CrossValidation::new(&self.records, &self.targets, k)
    }

    /// Split the dataset into `k` `(train, validation)` pairs
    pub fn fold(&self, k: usize) -> Result<Vec<(Dataset<T, L>, Dataset<T, L>)>> {
        Ok(self
            .cross_validation(k)?
            .map(|fold| fold.into_datasets())
            .collect())
    }
}

impl<T, L> From<(Vec<Vec<T>>, Vec<L>)> for Dataset<T, L> {
    fn from(rec_tar: (Vec<Vec<T>>, Vec<L>)) -> Self {
        Dataset::new(rec_tar.0, rec_tar.1)
    }
}
