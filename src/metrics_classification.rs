//! Common metrics for performance evaluation of classifier
//!
//! Scoring is essential for classification tasks. This module implements a confusion matrix
//! over arbitrary labels and the scores derived from it, like precision, accuracy, recall and
//! f1-score.
use std::collections::HashMap;
use std::fmt;

use ndarray::prelude::*;

use crate::dataset::{Dataset, Label};
use crate::error::{Error, Result};

/// Confusion matrix for multi-label evaluation
///
/// A confusion matrix shows predictions in a matrix, where rows correspond to ground truth and
/// columns to predicted. The diagonal entries are correct predictions. Labels are ordered by
/// their first appearance in the ground truth, labels only ever predicted are appended after.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<L> {
    matrix: Array2<usize>,
    members: Vec<L>,
}

impl<L> ConfusionMatrix<L> {
    /// Return the raw counts, `matrix[(truth, predicted)]`
    pub fn matrix(&self) -> &Array2<usize> {
        &self.matrix
    }

    /// Return the labels in row/column order
    pub fn members(&self) -> &[L] {
        &self.members
    }

    /// Calculate precision for every class
    ///
    /// Classes which were never predicted have a precision of zero.
    pub fn precision(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(0));

        Array1::from_iter(
            self.matrix
                .diag()
                .iter()
                .zip(sum.iter())
                .map(|(a, b)| ratio(*a, *b)),
        )
    }

    /// Calculate recall for every class
    ///
    /// Classes absent from the ground truth have a recall of zero.
    pub fn recall(&self) -> Array1<f32> {
        let sum = self.matrix.sum_axis(Axis(1));

        Array1::from_iter(
            self.matrix
                .diag()
                .iter()
                .zip(sum.iter())
                .map(|(a, b)| ratio(*a, *b)),
        )
    }

    /// Return mean accuracy, the fraction of correct predictions
    pub fn accuracy(&self) -> f32 {
        ratio(self.matrix.diag().sum(), self.matrix.sum())
    }

    /// Return the beta score for every class
    pub fn f_score(&self, beta: f32) -> Array1<f32> {
        let sb = beta * beta;
        let precision = self.precision();
        let recall = self.recall();

        Array::from_iter(precision.iter().zip(recall.iter()).map(|(p, r)| {
            if *p + *r == 0.0 {
                0.0
            } else {
                (1.0 + sb) * (p * r) / (sb * p + r)
            }
        }))
    }

    /// Return the beta=1 score for every class
    pub fn f1_score(&self) -> Array1<f32> {
        self.f_score(1.0)
    }

    /// Return every row in percent of its ground truth total
    ///
    /// Entry `(i, j)` is the share of documents labeled `members[i]` which were predicted as
    /// `members[j]`. Rows of labels without ground truth documents stay zero.
    pub fn row_percentages(&self) -> Array2<f32> {
        let mut percentages = self.matrix.mapv(|x| x as f32);
        for mut row in percentages.rows_mut() {
            let sum = row.sum();
            if sum > 0.0 {
                row.mapv_inplace(|x| 100.0 * x / sum);
            }
        }

        percentages
    }

    /// Return the Matthew Correlation Coefficients
    ///
    /// Estimates the normalized cross-correlation between target and predicted variable
    pub fn mcc(&self) -> f32 {
        let n = self.members.len();
        let mut cov_xy = 0.0;
        for k in 0..n {
            for l in 0..n {
                for m in 0..n {
                    cov_xy += self.matrix[(k, k)] as f32 * self.matrix[(l, m)] as f32;
                    cov_xy -= self.matrix[(k, l)] as f32 * self.matrix[(m, k)] as f32;
                }
            }
        }

        let sum = self.matrix.sum();
        let sum_over_cols = self.matrix.sum_axis(Axis(0));
        let sum_over_rows = self.matrix.sum_axis(Axis(1));

        let mut cov_xx: f32 = 0.0;
        let mut cov_yy: f32 = 0.0;
        for k in 0..n {
            cov_xx += (sum_over_rows[k] * (sum - sum_over_rows[k])) as f32;
            cov_yy += (sum_over_cols[k] * (sum - sum_over_cols[k])) as f32;
        }

        cov_xy / cov_xx.sqrt() / cov_yy.sqrt()
    }
}

impl<L: PartialEq> ConfusionMatrix<L> {
    /// Return how often `truth` was predicted as `predicted`
    pub fn count(&self, truth: &L, predicted: &L) -> usize {
        let row = self.members.iter().position(|m| m == truth);
        let col = self.members.iter().position(|m| m == predicted);

        match (row, col) {
            (Some(i), Some(j)) => self.matrix[(i, j)],
            _ => 0,
        }
    }
}

fn ratio(a: usize, b: usize) -> f32 {
    if b == 0 {
        0.0
    } else {
        a as f32 / b as f32
    }
}

/// Print a confusion matrix
///
/// Every cell shows the count followed by its share of the row in percent.
impl<L: fmt::Display> fmt::Display for ConfusionMatrix<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let percentages = self.row_percentages();
        let names = self
            .members
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>();
        let width = names
            .iter()
            .map(|n| n.len())
            .chain(std::iter::once(14))
            .max()
            .unwrap_or(14);

        write!(f, "{:>width$} |", "", width = width)?;
        for name in &names {
            write!(f, " {:>width$} |", name, width = width)?;
        }
        writeln!(f)?;

        for (i, name) in names.iter().enumerate() {
            write!(f, "{:>width$} |", name, width = width)?;
            for j in 0..names.len() {
                let cell = format!("{} ({:.1}%)", self.matrix[(i, j)], percentages[(i, j)]);
                write!(f, " {:>width$} |", cell, width = width)?;
            }
            writeln!(f)?;
        }

        write!(f, "accuracy: {:.4}", self.accuracy())
    }
}

/// Classification functions
///
/// Contains only routine for Confusion Matrix, as all other current metrices can be derived from
/// the entries in the matrix. The ground truth `G` is a slice of labels, a `Vec` of labels or a
/// dataset whose targets are used.
pub trait ToConfusionMatrix<L, G: ?Sized> {
    fn confusion_matrix(&self, ground_truth: &G) -> Result<ConfusionMatrix<L>>;
}

impl<L: Label> ToConfusionMatrix<L, [L]> for [L] {
    fn confusion_matrix(&self, ground_truth: &[L]) -> Result<ConfusionMatrix<L>> {
        if self.len() != ground_truth.len() {
            return Err(Error::MismatchedShapes(ground_truth.len(), self.len()));
        }

        // labels in order of first appearance, ground truth first
        let mut members = Vec::new();
        let mut indices = HashMap::new();
        for label in ground_truth.iter().chain(self.iter()) {
            if !indices.contains_key(label) {
                indices.insert(label.clone(), members.len());
                members.push(label.clone());
            }
        }

        // count each index tuple in the confusion matrix
        let mut matrix = Array2::<usize>::zeros((members.len(), members.len()));
        for (truth, predicted) in ground_truth.iter().zip(self.iter()) {
            matrix[(indices[truth], indices[predicted])] += 1;
        }

        Ok(ConfusionMatrix { matrix, members })
    }
}

impl<L: Label> ToConfusionMatrix<L, Vec<L>> for [L] {
    fn confusion_matrix(&self, ground_truth: &Vec<L>) -> Result<ConfusionMatrix<L>> {
        <[L] as ToConfusionMatrix<L, [L]>>::confusion_matrix(self, ground_truth.as_slice())
    }
}

impl<T, L: Label> ToConfusionMatrix<L, Dataset<T, L>> for [L] {
    fn confusion_matrix(&self, ground_truth: &Dataset<T, L>) -> Result<ConfusionMatrix<L>> {
        <[L] as ToConfusionMatrix<L, [L]>>::confusion_matrix(self, ground_truth.targets())
    }
}

impl<L: Label, G: ?Sized> ToConfusionMatrix<L, G> for Vec<L>
where
    [L]: ToConfusionMatrix<L, G>,
{
    fn confusion_matrix(&self, ground_truth: &G) -> Result<ConfusionMatrix<L>> {
        self.as_slice().confusion_matrix(ground_truth)
    }
}
