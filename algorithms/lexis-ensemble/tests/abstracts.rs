use lexis::prelude::*;
use lexis_ensemble::{AdaBoost, Result};
use lexis_trees::DecisionStump;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn cross_validated_accuracy() -> Result<()> {
    let dataset = lexis_datasets::abstracts();

    let mut correct = 0.0;
    for fold in dataset.cross_validation(4)? {
        let (train, test) = fold.into_datasets();

        let model = AdaBoost::params()
            .weak_learner(DecisionStump::params_with_rng(SmallRng::seed_from_u64(42)))
            .n_iter(10)
            .fit(&train)?;
        let predictions = model.predict_dataset(&test);

        correct += predictions.confusion_matrix(&test)?.accuracy() * test.nsamples() as f32;
    }

    assert!(correct / dataset.nsamples() as f32 > 0.8);

    Ok(())
}

#[test]
fn every_round_is_informative() -> Result<()> {
    let dataset = lexis_datasets::abstracts();
    let model = AdaBoost::params()
        .weak_learner(DecisionStump::params_with_rng(SmallRng::seed_from_u64(7)))
        .n_iter(10)
        .fit(&dataset)?;

    assert_eq!(model.n_classes(), 4);
    assert_eq!(model.classifiers().len(), 10);
    for (alpha, error) in model.alphas().iter().zip(model.errors()) {
        // better than guessing among four classes
        assert!(*error > 0.0 && *error < 0.75);
        assert!(*alpha > 0.0);
    }

    let predictions = model.predict_dataset(&dataset);
    assert!(predictions.confusion_matrix(&dataset)?.accuracy() > 0.85);

    Ok(())
}
