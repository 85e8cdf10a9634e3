//! `lexis-datasets` provides small tokenized corpora ready to be used in tests and examples.
//!
//! ## The Big Picture
//!
//! `lexis-datasets` is a crate in the `lexis` workspace, a toolkit for the statistical
//! classification of tokenized text.
//!
//! ## Current State
//!
//! Currently the following corpora are provided:
//!
//! * `["abstracts"]` : stemmed words of short paper abstracts in the categories `math`, `cs`,
//! `physics` and `stat`
//!
//! along with a function to parse corpora of the same layout. Loaded corpora are returned as a
//! [`lexis::Dataset`] of `String` tokens and `String` labels.
//!
//! ## Using a dataset
//!
//! To use one of the provided corpora in your project add the crate to your Cargo.toml with the
//! corresponding feature enabled:
//! ```ignore
//! lexis-datasets = { version = "0.1.0", features = ["abstracts"] }
//! ```
//! and then use it in your example or tests as
//! ```ignore
//! let folds = lexis_datasets::abstracts().fold(4)?;
//!  /// ...
//! ```

use std::io::Read;

use csv::ReaderBuilder;
use lexis::Dataset;

/// Parse a corpus from CSV
///
/// Every row holds a label in the first column and the space separated tokens of a document in
/// the second column. Empty documents are kept, they may still carry a label.
pub fn corpus_from_csv<R: Read>(
    csv: R,
    has_headers: bool,
    separator: u8,
) -> Result<Dataset<String, String>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(separator)
        .from_reader(csv);

    let mut records = Vec::new();
    let mut targets = Vec::new();
    for row in reader.deserialize() {
        let (label, document): (String, String) = row?;

        records.push(document.split_whitespace().map(String::from).collect());
        targets.push(label);
    }

    Ok(Dataset::new(records, targets))
}

#[cfg(feature = "abstracts")]
/// Read in the embedded corpus of tokenized paper abstracts
///
/// Documents of the four categories alternate, so contiguous cross validation folds see every
/// category. A few cross-disciplinary abstracts appear twice, once under each of their
/// categories, so no classifier fits the corpus without training errors.
pub fn abstracts() -> Dataset<String, String> {
    let data = include_bytes!("../data/abstracts.csv");

    corpus_from_csv(&data[..], true, b',').unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_corpus() -> Result<(), csv::Error> {
        let data = "label;document\nx;a b  c\ny;\nx;b\n";
        let dataset = corpus_from_csv(data.as_bytes(), true, b';')?;

        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.records[0], vec!["a", "b", "c"]);
        assert!(dataset.records[1].is_empty());
        assert_eq!(dataset.targets(), &["x", "y", "x"]);

        Ok(())
    }

    #[test]
    fn malformed_rows_are_reported() {
        let data = "x\n";
        assert!(corpus_from_csv(data.as_bytes(), false, b',').is_err());
    }

    #[cfg(feature = "abstracts")]
    #[test]
    fn test_abstracts() {
        let dataset = abstracts();

        assert_eq!(dataset.nsamples(), 56);
        assert_eq!(dataset.labels(), vec!["math", "cs", "physics", "stat"]);
        assert!(dataset.records.iter().all(|document| !document.is_empty()));

        let freqs = dataset.label_frequencies();
        for label in dataset.labels() {
            assert_eq!(freqs[&label], 14.0);
        }
    }
}
