use super::*;
use crate::config::EngineConfig;

fn corpus() -> FittedCorpus {
    let recipes = vec![
        Recipe::new(1, "Pizza", &["cheese", "tomato", "dough"][..]),
        Recipe::new(2, "Pasta", &["tomato", "pasta", "cheese"][..]),
        Recipe::new(3, "Salad", &["lettuce", "cucumber", "tomato"][..]),
        Recipe::new(4, "Burger", &["beef", "bun", "lettuce"][..]),
        Recipe::new(5, "Soup", &["carrot", "onion", "potato"][..]),
    ];
    FittedCorpus::fit(recipes, &EngineConfig::default()).expect("valid")
}

#[test]
fn test_shared_ingredients_rank_higher() {
    let corpus = corpus();
    let names: Vec<String> = SimilarityEngine::new(&corpus)
        .recommend(1, 2)
        .expect("valid query")
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Pasta", "Salad"]);
}

#[test]
fn test_scores_non_increasing_and_exclude_reference() {
    let corpus = corpus();
    let scored = SimilarityEngine::new(&corpus)
        .recommend_scored(3, 4)
        .expect("valid query");

    assert_eq!(scored.len(), 4);
    assert!(scored.iter().all(|r| r.recipe.id != 3));
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(scored.iter().all(|r| (0.0..=1.0 + 1e-12).contains(&r.score)));
}

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = corpus();
    // Soup shares nothing: every other recipe scores 0.
    let ids: Vec<i64> = corpus
        .recommend(5, 4)
        .expect("valid query")
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_unknown_id() {
    let corpus = corpus();
    assert_eq!(
        corpus.recommend(99, 1).expect_err("unknown"),
        CocinarError::NotFound { id: 99 }
    );
}

#[test]
fn test_top_n_out_of_range() {
    let corpus = corpus();
    for top_n in [0, 5, 100] {
        assert!(matches!(
            corpus.recommend(1, top_n),
            Err(CocinarError::InvalidParameter { .. })
        ));
    }
    assert_eq!(corpus.recommend(1, 4).expect("N - 1 is valid").len(), 4);
}

#[test]
fn test_repeated_calls_identical() {
    let corpus = corpus();
    let engine = SimilarityEngine::new(&corpus);
    assert_eq!(
        engine.recommend_scored(2, 3).expect("valid"),
        engine.recommend_scored(2, 3).expect("valid")
    );
}
