//! Integration tests for Cocinar.
//!
//! These tests verify end-to-end workflows from raw recipes to queries.

use cocinar::prelude::*;
use std::sync::Arc;
use std::thread;

fn five_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Pizza", "['cheese', 'tomato', 'dough']").with_attributes(25.0, 3.0, 4.0),
        Recipe::new(2, "Pasta", "['tomato', 'pasta', 'cheese']").with_attributes(20.0, 3.0, 5.0),
        Recipe::new(3, "Salad", "['lettuce', 'cucumber', 'tomato']").with_attributes(10.0, 3.0, 2.0),
        Recipe::new(4, "Burger", "['beef', 'bun', 'lettuce']").with_attributes(30.0, 3.0, 6.0),
        Recipe::new(5, "Soup", "['carrot', 'onion', 'potato']").with_attributes(60.0, 3.0, 8.0),
    ]
}

fn fitted() -> FittedCorpus {
    FittedCorpus::fit(five_recipes(), &EngineConfig::default()).expect("valid corpus")
}

#[test]
fn test_recommend_pizza_ranks_pasta_above_salad() {
    let corpus = fitted();
    let results = corpus.recommend(1, 2).expect("valid query");

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Pasta", "Salad"]);
    assert!(results.iter().all(|r| r.id != 1));
}

#[test]
fn test_recommend_scores_match_ranking() {
    let corpus = fitted();
    let scored = corpus.recommend_scored(1, 4).expect("valid query");

    assert_eq!(scored.len(), 4);
    assert!(scored[0].score > scored[1].score);
    // Burger and Soup share nothing with Pizza.
    assert_eq!(scored[2].score, 0.0);
    assert_eq!(scored[3].score, 0.0);
    assert_eq!(scored[2].recipe.name, "Burger");
    assert_eq!(scored[3].recipe.name, "Soup");
}

#[test]
fn test_recommend_unknown_id_is_not_found() {
    let corpus = fitted();
    let err = corpus.recommend(42, 1).expect_err("unknown id");
    assert_eq!(err, CocinarError::NotFound { id: 42 });
    assert!(err.is_recoverable());
}

#[test]
fn test_recommend_top_n_bounds() {
    let corpus = fitted();
    assert!(matches!(
        corpus.recommend(1, 0),
        Err(CocinarError::InvalidParameter { .. })
    ));
    assert!(matches!(
        corpus.recommend(1, 5),
        Err(CocinarError::InvalidParameter { .. })
    ));
    assert_eq!(corpus.recommend(1, 4).expect("N - 1").len(), 4);
}

#[test]
fn test_cluster_k_equals_n() {
    let corpus = fitted();
    let result = corpus.cluster(5).expect("k == N");

    assert_eq!(result.len(), 5);
    assert_eq!(result.sizes(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn test_cluster_k_above_n_is_invalid() {
    let corpus = fitted();
    let err = corpus.cluster(6).expect_err("k > N");
    assert!(matches!(err, CocinarError::InvalidParameter { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn test_cluster_rows_follow_corpus_order() {
    let corpus = fitted();
    let result = corpus.cluster(3).expect("valid k");
    for (point, recipe) in result.points.iter().zip(corpus.recipes()) {
        assert_eq!(point.name, recipe.name);
        assert!(point.cluster < 3);
    }
}

#[test]
fn test_from_json_pipeline() {
    let json = r#"[
        {"id": 1, "name": "Pizza", "ingredients": "['cheese', 'tomato', 'dough']", "minutes": 25, "n_ingredients": 3, "n_steps": 4},
        {"id": 2, "name": "Pasta", "ingredients": ["tomato", "pasta", "cheese"], "minutes": 20, "n_ingredients": 3, "n_steps": 5},
        {"id": 3, "name": "Salad", "ingredients": "[\"lettuce\", \"cucumber\", \"tomato\"]", "minutes": 10, "n_ingredients": 3, "n_steps": 2}
    ]"#;
    let corpus = FittedCorpus::from_json(json, &EngineConfig::default()).expect("valid table");

    assert_eq!(corpus.documents()[2], "lettuce cucumber tomato");
    assert_eq!(corpus.recommend(1, 1).expect("valid")[0].name, "Pasta");
}

#[test]
fn test_from_json_missing_column_is_construction_error() {
    let json = r#"[{"id": 1, "name": "Pizza", "ingredients": ["cheese"], "n_ingredients": 1, "n_steps": 4}]"#;
    let err = FittedCorpus::from_json(json, &EngineConfig::default()).expect_err("no minutes");
    assert!(matches!(err, CocinarError::Construction { .. }));
}

#[test]
fn test_malformed_ingredients_recovered() {
    let mut recipes = five_recipes();
    recipes.push(Recipe::new(6, "Mystery", "__import__('os').system('ls')").with_attributes(5.0, 1.0, 1.0));

    let corpus = FittedCorpus::fit(recipes, &EngineConfig::default()).expect("recovered");
    assert_eq!(corpus.parse_failures().len(), 1);
    assert_eq!(corpus.parse_failures()[0].id, 6);

    // An empty document is similar to nothing, so it ranks last.
    let ranked = corpus.recommend(1, 5).expect("valid");
    assert_eq!(ranked[4].name, "Mystery");
}

#[test]
fn test_empty_corpus_is_construction_error() {
    assert!(matches!(
        FittedCorpus::fit(Vec::new(), &EngineConfig::default()),
        Err(CocinarError::Construction { .. })
    ));
}

#[test]
fn test_config_from_json_drives_clustering() {
    let config = EngineConfig::from_json(r#"{"random_state": 7, "kmeans_n_init": 2}"#)
        .expect("valid config");
    let a = FittedCorpus::fit(five_recipes(), &config).expect("valid");
    let b = FittedCorpus::fit(five_recipes(), &config).expect("valid");
    assert_eq!(a.cluster(2).expect("valid"), b.cluster(2).expect("valid"));
}

#[test]
fn test_concurrent_queries_share_corpus() {
    let corpus = Arc::new(fitted());
    let expected = corpus.cluster(2).expect("valid");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || {
                let recs = corpus.recommend(2, 3).expect("valid");
                let clusters = corpus.cluster(2).expect("valid");
                (recs, clusters)
            })
        })
        .collect();

    for handle in handles {
        let (recs, clusters) = handle.join().expect("thread completes");
        assert_eq!(recs.len(), 3);
        assert_eq!(clusters, expected);
    }
}
