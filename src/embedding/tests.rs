use super::*;

fn stub_embedder() -> Embedder {
    Embedder::load(EmbedderConfig::stub()).expect("stub embedder")
}

#[test]
fn test_stub_embedding_is_deterministic() {
    let embedder = stub_embedder();

    let a = embedder.embed("the same text").expect("embed");
    let b = embedder.embed("the same text").expect("embed");

    assert_eq!(a, b);
}

#[test]
fn test_stub_embedding_differs_per_text() {
    let embedder = stub_embedder();

    let a = embedder.embed("first document").expect("embed");
    let b = embedder.embed("second document").expect("embed");

    assert_ne!(a, b);
}

#[test]
fn test_stub_embedding_dimension() {
    let embedder = stub_embedder();
    let v = embedder.embed("dimensional check").expect("embed");
    assert_eq!(v.len(), DEFAULT_EMBEDDING_DIM);
    assert_eq!(embedder.embedding_dim(), DEFAULT_EMBEDDING_DIM);
}

#[test]
fn test_stub_embedding_is_unit_norm() {
    let embedder = stub_embedder();
    let v = embedder.embed("norm check").expect("embed");

    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 1e-4, "norm was {norm}");
}

#[test]
fn test_stub_mode_flag() {
    let embedder = stub_embedder();
    assert!(embedder.is_stub());
}

#[test]
fn test_non_stub_requires_model_dir() {
    let result = Embedder::load(EmbedderConfig::default());
    assert!(matches!(
        result,
        Err(EmbeddingError::InvalidConfig { .. })
    ));
}

#[test]
fn test_non_stub_missing_dir_is_model_not_found() {
    let result = Embedder::load(EmbedderConfig::new("/nonexistent/model-dir"));
    assert!(matches!(result, Err(EmbeddingError::ModelNotFound { .. })));
}
