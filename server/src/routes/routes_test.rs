use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn leptos_config_error_names_its_source() {
    let err = ServerError::LeptosConfig("missing site-root".into());
    assert_eq!(err.to_string(), "leptos configuration: missing site-root");
}
