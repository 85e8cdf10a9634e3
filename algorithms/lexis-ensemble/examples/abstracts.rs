use std::error::Error;

use lexis::prelude::*;
use lexis_bayes::NaiveBayes;
use lexis_ensemble::AdaBoost;
use lexis_trees::DecisionStump;
use rand::{rngs::SmallRng, SeedableRng};

const N_FOLDS: usize = 4;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    let dataset = lexis_datasets::abstracts();
    let mut rng = SmallRng::seed_from_u64(42);

    // drop the least informative words before any model sees the corpus
    let dataset = prune_lowest(&dataset, 0.06)?;
    println!(
        "{} abstracts, {} labels, {} words",
        dataset.nsamples(),
        dataset.labels().len(),
        dataset.vocabulary().len()
    );

    let mut truth = Vec::new();
    let mut bayes = Vec::new();
    let mut stumps = Vec::new();
    let mut boosted = Vec::new();

    for fold in dataset.cross_validation(N_FOLDS)? {
        let index = fold.index;
        let (train, test) = fold.into_datasets();

        let model = NaiveBayes::<_, _, f64>::params().fit(&train)?;
        bayes.extend(model.predict_dataset(&test));

        let stump =
            DecisionStump::<_, _, f64, _>::params_with_rng(SmallRng::from_rng(&mut rng)?);
        let model = stump.fit(&train)?;
        stumps.extend(model.predict_dataset(&test));

        let model = AdaBoost::params()
            .weak_learner(DecisionStump::params_with_rng(SmallRng::from_rng(&mut rng)?))
            .n_iter(10)
            .fit(&train)?;
        boosted.extend(model.predict_dataset(&test));

        println!(
            "fold {}: {} rounds, alphas {:.3?}",
            index,
            model.alphas().len(),
            model.alphas()
        );

        truth.extend(test.targets);
    }

    for (name, predictions) in &[
        ("Naive Bayes", bayes),
        ("Decision stump", stumps),
        ("AdaBoost", boosted),
    ] {
        let cm = predictions.confusion_matrix(&truth)?;
        println!("\n{} over {} folds", name, N_FOLDS);
        println!("{}", cm);
        println!("f1 score: {:.4}", cm.f1_score());
    }

    Ok(())
}
