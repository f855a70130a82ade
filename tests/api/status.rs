//! tests/api/status.rs

use crate::helpers::setup;
use serde_json::json;
use wiremock::{matchers::any, Mock, ResponseTemplate};

#[tokio::test]
async fn status_reports_the_version() {
    let test = setup().await;

    let response = test.get("/status").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body is not JSON");
    assert_eq!(body, json!({ "status": "online", "versao": "pro" }));
}

#[tokio::test]
async fn refresh_acknowledges_the_request() {
    let test = setup().await;

    let response = test.post("/atualizar").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Body is not JSON");
    assert_eq!(
        body,
        json!({ "mensagem": "Função de atualização profissional ativa" })
    );
}

#[tokio::test]
async fn refresh_rejects_other_methods() {
    let test = setup().await;

    let response = test.get("/atualizar").await;

    assert_eq!(405, response.status().as_u16());
}

#[tokio::test]
async fn undefined_routes_return_404() {
    let test = setup().await;

    let response = test.get("/clientes").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let test = setup().await;

    let response = test.get("/").await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn preflight_requests_are_answered_with_204() {
    // Arrange
    let test = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.supabase_server)
        .await;

    // Act
    let response = test.options("/produtos", None).await;

    // Assert
    assert_eq!(204, response.status().as_u16());
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-methods")
            .and_then(|value| value.to_str().ok()),
        Some("GET,HEAD,PUT,PATCH,POST,DELETE")
    );
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    assert!(headers.get("access-control-allow-headers").is_none());
}

#[tokio::test]
async fn preflight_echoes_the_requested_headers() {
    let test = setup().await;

    let response = test.options("/atualizar", Some("content-type,x-client-info")).await;

    assert_eq!(204, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-headers")
            .and_then(|value| value.to_str().ok()),
        Some("content-type,x-client-info")
    );
}

#[tokio::test]
async fn preflight_does_not_shadow_other_methods() {
    let test = setup().await;

    for path in ["/", "/status"] {
        let response = test.get(path).await;

        assert_eq!(200, response.status().as_u16(), "GET {} failed", path);
    }
}
