use blur::{
    markov_weights_dict, merge_markov_weights_dicts, random_weight_list, weighted_curve_rand,
    weighted_option_rand, WeightCurve, WeightedOptions,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");

    // Acceptance rate drops as the curve gets spikier.
    let sizes = [3, 30, 300];

    for &size in &sizes {
        let points = random_weight_list(0, size * 10, 0.1, None).expect("valid config");
        let curve = WeightCurve::new(points.clone()).expect("curve");

        group.bench_function(format!("prepared_span{}", size * 10), |b| {
            b.iter(|| black_box(curve.sample(false)))
        });

        group.bench_function(format!("one_shot_span{}", size * 10), |b| {
            b.iter(|| black_box(weighted_curve_rand(black_box(points.clone()), false)))
        });
    }
    group.finish();
}

fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");
    let sizes = [10, 100, 1000];

    for &size in &sizes {
        let weights: Vec<(usize, f64)> = (0..size).map(|i| (i, 1.0 + (i % 7) as f64)).collect();
        let options = WeightedOptions::new(weights.clone()).expect("options");

        group.bench_function(format!("prepared_n{}", size), |b| {
            b.iter(|| black_box(options.sample()))
        });

        group.bench_function(format!("one_shot_n{}", size), |b| {
            b.iter(|| black_box(weighted_option_rand(black_box(weights.clone()))))
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("int_0_1000", |b| {
        b.iter(|| black_box(random_weight_list(0, black_box(1000), 0.1, None)))
    });
    group.bench_function("float_0_1", |b| {
        b.iter(|| black_box(random_weight_list(0.0, black_box(1.0), 0.1, None)))
    });
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let a = markov_weights_dict(0, 200).expect("valid config");
    let b = markov_weights_dict(50, 250).expect("valid config");
    group.bench_function("span_250", |bench| {
        bench.iter(|| black_box(merge_markov_weights_dicts(&a, &b, 0.5)))
    });
    group.finish();
}

criterion_group!(benches, bench_curve, bench_options, bench_generate, bench_merge);
criterion_main!(benches);
