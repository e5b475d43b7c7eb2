use super::*;

#[test]
fn backend_url_strips_api_prefix() {
    assert_eq!(
        backend_url("http://localhost:8080/api", "/api/monsters/validate", None),
        "http://localhost:8080/api/monsters/validate"
    );
}

#[test]
fn backend_url_keeps_query() {
    assert_eq!(
        backend_url("http://backend/", "/api/monsters/42", Some("include=owner")),
        "http://backend/monsters/42?include=owner"
    );
}

#[test]
fn backend_url_ignores_empty_query() {
    assert_eq!(backend_url("http://backend", "/api/monsters", Some("")), "http://backend/monsters");
}

#[test]
fn backend_url_passes_unprefixed_paths() {
    assert_eq!(backend_url("http://backend", "/monsters", None), "http://backend/monsters");
}

#[tokio::test]
async fn forward_without_backend_is_service_unavailable() {
    let config = crate::config::ServerConfig { port: 0, backend_url: None, backend_timeout_secs: 1 };
    let state = AppState::new(config).unwrap();
    let resp = forward(State(state), Method::POST, Uri::from_static("/api/monsters"), Bytes::new()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
