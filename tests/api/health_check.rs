//! tests/api/health_check.rs

use crate::helpers::{setup, setup_with, unreachable_url};
use wiremock::{matchers::any, Mock, ResponseTemplate};

#[tokio::test]
async fn health_check_works() {
    let test = setup().await;

    let response = test.get("/").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body is not JSON");
    assert_eq!(
        body,
        serde_json::json!({ "status": "OK", "message": "Robo Global API ativo" })
    );
}

#[tokio::test]
async fn health_check_does_not_call_supabase() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&test.supabase_server)
        .await;

    // Act
    let response = test.get("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn health_check_works_when_supabase_is_unreachable() {
    let test = setup_with(|config| config.set_supabase_url(unreachable_url())).await;

    let response = test.get("/").await;

    assert_eq!(200, response.status().as_u16());
}
