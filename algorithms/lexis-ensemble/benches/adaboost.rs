use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lexis::prelude::*;
use lexis_ensemble::AdaBoost;
use lexis_trees::DecisionStump;
use rand::{rngs::SmallRng, SeedableRng};

fn adaboost_fit_bench(c: &mut Criterion) {
    let dataset = lexis_datasets::abstracts();

    let mut group = c.benchmark_group("adaboost_fit");
    for n_iter in [1, 5, 20].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n_iter), n_iter, |b, n_iter| {
            b.iter(|| {
                AdaBoost::params()
                    .weak_learner(DecisionStump::params_with_rng(SmallRng::seed_from_u64(42)))
                    .n_iter(*n_iter)
                    .fit(black_box(&dataset))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, adaboost_fit_bench);
criterion_main!(benches);
