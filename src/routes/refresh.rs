//! src/routes/refresh.rs
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct Refresh {
    mensagem: &'static str,
}

/// Acknowledges a refresh request. Scores are recomputed elsewhere.
#[tracing::instrument(name = "Acknowledging a refresh request")]
pub async fn refresh() -> HttpResponse {
    HttpResponse::Ok().json(Refresh {
        mensagem: "Função de atualização profissional ativa",
    })
}
