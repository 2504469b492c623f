use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn route_error_message_names_leptos_config() {
    let err = RouteError::Leptos("missing site-root".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing site-root");
}
