use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("financial-analyst")
        .site_root("target/does-not-exist")
        .build()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = app(test_options())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_returns_not_found() {
    let resp = app(test_options())
        .oneshot(Request::get("/pkg/financial-analyst.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let resp = app(test_options())
        .oneshot(Request::get("/conversations").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
