use std::iter::FusedIterator;

use super::Dataset;
use crate::error::{Error, Result};

/// A single train/test split produced by [`CrossValidation`]
///
/// The test part is a contiguous block of the original documents, the train part contains all
/// documents before and after the block in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold<T, L> {
    /// Position of the fold, starting at zero
    pub index: usize,
    pub train_records: Vec<Vec<T>>,
    pub train_targets: Vec<L>,
    pub test_records: Vec<Vec<T>>,
    pub test_targets: Vec<L>,
}

impl<T, L> Fold<T, L> {
    /// Split into `(train_records, train_targets, test_records, test_targets)`
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<L>, Vec<Vec<T>>, Vec<L>) {
        (
            self.train_records,
            self.train_targets,
            self.test_records,
            self.test_targets,
        )
    }

    /// Convert into a `(train, test)` pair of datasets
    pub fn into_datasets(self) -> (Dataset<T, L>, Dataset<T, L>) {
        (
            Dataset::new(self.train_records, self.train_targets),
            Dataset::new(self.test_records, self.test_targets),
        )
    }
}

/// K-fold cross validation over an ordered dataset
///
/// The documents are cut into `k` contiguous blocks of `n / k` documents each (integer
/// division). The `i`th fold tests on the block `[i * n / k, (i + 1) * n / k)` and trains on
/// everything else, concatenated in the original order. If `n` is not a multiple of `k` the
/// trailing `n % k` documents never appear in a test block, they are part of every training
/// split instead.
///
/// The iterator is single pass, it does not shuffle. Shuffle the documents beforehand if the
/// corpus is sorted by label.
///
/// ```rust
/// use lexis::CrossValidation;
///
/// let records = vec![vec![1], vec![2], vec![3], vec![4], vec![5], vec![6]];
/// let targets = vec![0, 0, 0, 1, 1, 1];
///
/// let tests = CrossValidation::new(&records, &targets, 3)?
///     .map(|fold| fold.test_records)
///     .collect::<Vec<_>>();
///
/// assert_eq!(tests, vec![
///     vec![vec![1], vec![2]],
///     vec![vec![3], vec![4]],
///     vec![vec![5], vec![6]],
/// ]);
/// # Ok::<(), lexis::Error>(())
/// ```
pub struct CrossValidation<'a, T, L> {
    records: &'a [Vec<T>],
    targets: &'a [L],
    n_folds: usize,
    block_size: usize,
    current_fold: usize,
}

impl<'a, T, L> CrossValidation<'a, T, L> {
    /// Construct a new cross validation iterator with `k` folds
    ///
    /// Fails if records and targets differ in length, if `k` is zero or if `k` exceeds the
    /// number of documents (the test blocks would be empty).
    pub fn new(records: &'a [Vec<T>], targets: &'a [L], k: usize) -> Result<Self> {
        if records.len() != targets.len() {
            return Err(Error::MismatchedShapes(records.len(), targets.len()));
        }

        if k == 0 || k > records.len() {
            return Err(Error::Parameters(format!(
                "the number of folds should lie in [1, {}], but was {}",
                records.len(),
                k
            )));
        }

        Ok(CrossValidation {
            records,
            targets,
            n_folds: k,
            block_size: records.len() / k,
            current_fold: 0,
        })
    }

    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// Number of documents in every test block
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl<'a, T: Clone, L: Clone> Iterator for CrossValidation<'a, T, L> {
    type Item = Fold<T, L>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds {
            return None;
        }

        let (start, end) = (
            self.current_fold * self.block_size,
            (self.current_fold + 1) * self.block_size,
        );

        let train_records = [&self.records[..start], &self.records[end..]].concat();
        let train_targets = [&self.targets[..start], &self.targets[end..]].concat();

        let fold = Fold {
            index: self.current_fold,
            train_records,
            train_targets,
            test_records: self.records[start..end].to_vec(),
            test_targets: self.targets[start..end].to_vec(),
        };
        self.current_fold += 1;

        log::debug!(
            "fold {}/{}: {} train documents, {} test documents",
            self.current_fold,
            self.n_folds,
            fold.train_records.len(),
            fold.test_records.len()
        );

        Some(fold)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n_folds - self.current_fold;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Clone, L: Clone> ExactSizeIterator for CrossValidation<'a, T, L> {}

impl<'a, T: Clone, L: Clone> FusedIterator for CrossValidation<'a, T, L> {}
