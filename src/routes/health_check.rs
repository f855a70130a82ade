//! src/routes/health_check.rs
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "OK",
        message: "Robo Global API ativo",
    })
}
