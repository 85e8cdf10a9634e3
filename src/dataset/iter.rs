use std::iter::FusedIterator;

/// Iterator over `(document, label)` pairs of a dataset
pub struct Iter<'a, T, L> {
    records: &'a [Vec<T>],
    targets: &'a [L],
    idx: usize,
}

impl<'a, T, L> Iter<'a, T, L> {
    pub fn new(records: &'a [Vec<T>], targets: &'a [L]) -> Iter<'a, T, L> {
        Iter {
            records,
            targets,
            idx: 0,
        }
    }
}

impl<'a, T, L> Iterator for Iter<'a, T, L> {
    type Item = (&'a [T], &'a L);

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.get(self.idx)?;
        let target = self.targets.get(self.idx)?;
        self.idx += 1;

        Some((record.as_slice(), target))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.records.len().min(self.targets.len());
        let remaining = len.saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl<'a, T, L> ExactSizeIterator for Iter<'a, T, L> {}

impl<'a, T, L> FusedIterator for Iter<'a, T, L> {}
