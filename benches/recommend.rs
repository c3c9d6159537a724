use cocinar::config::EngineConfig;
use cocinar::recommend::{FittedCorpus, Recipe};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_recipes(n: usize) -> Vec<Recipe> {
    let bases = [
        "flour", "rice", "pasta", "potato", "bread", "quinoa", "noodle", "tortilla", "couscous",
        "barley",
    ];
    let proteins = [
        "chicken", "beef", "tofu", "salmon", "egg", "lentil", "pork", "shrimp", "bean", "turkey",
    ];
    let aromatics = [
        "garlic", "onion", "ginger", "basil", "thyme", "cumin", "chili", "lemon", "parsley",
        "shallot",
    ];

    (0..n)
        .map(|i| {
            let ingredients = vec![
                bases[i % bases.len()].to_string(),
                proteins[(i / 10) % proteins.len()].to_string(),
                aromatics[(i / 100) % aromatics.len()].to_string(),
                "salt".to_string(),
            ];
            Recipe::new(i as i64, format!("recipe_{i}"), ingredients).with_attributes(
                (10 + i % 90) as f64,
                4.0,
                (2 + i % 12) as f64,
            )
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_fit");
    let config = EngineConfig::default();

    for size in [100, 1_000, 5_000].iter() {
        let recipes = generate_recipes(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| FittedCorpus::fit(black_box(recipes.clone()), &config).expect("valid"));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let config = EngineConfig::default();

    for size in [100, 1_000, 5_000].iter() {
        let corpus = FittedCorpus::fit(generate_recipes(*size), &config).expect("valid");
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| corpus.recommend(black_box(0), black_box(10)).expect("valid"));
        });
    }

    group.finish();
}

fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster");
    let config = EngineConfig::default();

    for size in [100, 500].iter() {
        let corpus = FittedCorpus::fit(generate_recipes(*size), &config).expect("valid");
        // First call pays for the projection; later calls reuse it.
        corpus.cluster(2).expect("valid");
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| corpus.cluster(black_box(8)).expect("valid"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_recommend, bench_cluster);
criterion_main!(benches);
