//! Provide traits for different classes of algorithms
//!

use crate::dataset::{Dataset, Label, Token};

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset of tokenized documents and creates a concept of some kind
/// about it. For example a Naive Bayes model estimates per-class token probabilities and a
/// decision stump keeps the tokens with the highest information gain.
///
/// The hyperparameter set implements `Fit` and every call returns a freshly estimated model, so
/// refitting never mixes state of different datasets. Sample weights, if any, are carried by
/// the dataset itself.
pub trait Fit<T: Token, L: Label, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &Dataset<T, L>) -> Result<Self::Object, E>;
}

/// Predict with a fitted model
///
/// Classifies a single tokenized document. Batch prediction is a thin loop over `predict`.
pub trait Predict<T, L> {
    fn predict(&self, document: &[T]) -> L;

    /// Predict a label for every document, in order
    fn predict_all<D: AsRef<[T]>>(&self, documents: &[D]) -> Vec<L> {
        documents
            .iter()
            .map(|document| self.predict(document.as_ref()))
            .collect()
    }

    /// Predict a label for every document of a dataset, in order
    fn predict_dataset(&self, dataset: &Dataset<T, L>) -> Vec<L> {
        self.predict_all(dataset.records())
    }
}
