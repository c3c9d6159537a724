use super::*;

fn sample_data() -> Matrix<f64> {
    // Two well-separated clusters
    Matrix::from_vec(
        6,
        2,
        vec![1.0, 2.0, 1.5, 1.8, 1.0, 0.6, 8.0, 8.0, 9.0, 11.0, 8.5, 9.0],
    )
    .expect("valid")
}

#[test]
fn test_new() {
    let kmeans = KMeans::new(3);
    assert_eq!(kmeans.n_clusters, 3);
    assert!(!kmeans.is_fitted());
}

#[test]
fn test_fit_basic() {
    let mut kmeans = KMeans::new(2);
    kmeans.fit(&sample_data()).expect("fit");

    assert!(kmeans.is_fitted());
    assert_eq!(kmeans.centroids().expect("fitted").shape(), (2, 2));
    assert!(kmeans.inertia() >= 0.0);
    assert!(kmeans.n_iter() >= 1);
}

#[test]
fn test_labels_consistency() {
    let data = sample_data();
    let mut kmeans = KMeans::new(2);
    kmeans.fit(&data).expect("fit");

    let labels = kmeans.predict(&data).expect("fitted");
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[1], labels[2]);
    assert_eq!(labels[3], labels[4]);
    assert_eq!(labels[4], labels[5]);
    assert_ne!(labels[0], labels[3]);
    assert_eq!(kmeans.labels().expect("fitted"), labels.as_slice());
}

#[test]
fn test_k_equals_n_gives_singletons() {
    let data = sample_data();
    let mut kmeans = KMeans::new(6);
    kmeans.fit(&data).expect("fit");

    let mut labels = kmeans.labels().expect("fitted").to_vec();
    labels.sort_unstable();
    assert_eq!(labels, vec![0, 1, 2, 3, 4, 5]);
    assert!(kmeans.inertia().abs() < 1e-12);
}

#[test]
fn test_duplicate_points_keep_labels_in_range() {
    let data = Matrix::from_vec(4, 1, vec![1.0, 1.0, 1.0, 5.0]).expect("valid");
    let mut kmeans = KMeans::new(3);
    kmeans.fit(&data).expect("fewer distinct points than clusters still fits");
    for &label in kmeans.labels().expect("fitted") {
        assert!(label < 3);
    }
}

#[test]
fn test_same_seed_same_labels() {
    let data = sample_data();
    let mut a = KMeans::new(3).with_random_state(11);
    let mut b = KMeans::new(3).with_random_state(11);
    a.fit(&data).expect("fit");
    b.fit(&data).expect("fit");
    assert_eq!(a.labels(), b.labels());
    assert_eq!(a.inertia(), b.inertia());
}

#[test]
fn test_builders() {
    let kmeans = KMeans::new(3)
        .with_max_iter(10)
        .with_tol(1e-6)
        .with_n_init(2)
        .with_random_state(9);
    assert_eq!(kmeans.max_iter, 10);
    assert!((kmeans.tol - 1e-6).abs() < 1e-15);
    assert_eq!(kmeans.n_init, 2);
    assert_eq!(kmeans.random_state, 9);
}

#[test]
fn test_invalid_parameters() {
    let data = sample_data();
    assert!(matches!(
        KMeans::new(7).fit(&data),
        Err(CocinarError::InvalidParameter { .. })
    ));
    assert!(KMeans::new(0).fit(&data).is_err());
    assert!(KMeans::new(2).with_max_iter(0).fit(&data).is_err());
    assert!(KMeans::new(2).with_n_init(0).fit(&data).is_err());
    assert!(KMeans::new(2).with_tol(f64::NAN).fit(&data).is_err());
    assert!(KMeans::new(1).fit(&Matrix::zeros(0, 2)).is_err());
}

#[test]
fn test_predict_requires_fit() {
    let kmeans = KMeans::new(2);
    assert!(kmeans.predict(&sample_data()).is_err());
}

#[test]
fn test_predict_feature_mismatch() {
    let mut kmeans = KMeans::new(2);
    kmeans.fit(&sample_data()).expect("fit");
    assert!(kmeans.predict(&Matrix::zeros(1, 3)).is_err());
}
