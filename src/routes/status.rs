//! src/routes/status.rs
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct Status {
    status: &'static str,
    versao: &'static str,
}

pub async fn status() -> HttpResponse {
    HttpResponse::Ok().json(Status {
        status: "online",
        versao: "pro",
    })
}
