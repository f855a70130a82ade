//! src/routes/tables.rs
use crate::configuration::{TableSettings, TableSource};
use crate::routes::error_chain_fmt;
use crate::supabase::{QueryError, Supabase};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;

#[derive(thiserror::Error)]
#[error("Failed to read all rows from `{table}`")]
pub struct ReadError {
    table: String,
    #[source]
    source: QueryError,
}

impl std::fmt::Debug for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: serde_json::Value,
}

impl ResponseError for ReadError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.source.payload(),
        })
    }
}

#[tracing::instrument(name = "Listing products", skip(supabase, tables))]
pub async fn list_products(
    supabase: web::Data<Supabase>,
    tables: web::Data<TableSettings>,
) -> Result<HttpResponse, ReadError> {
    read_all(&supabase, &tables.products).await
}

#[tracing::instrument(name = "Listing the ranking", skip(supabase, tables))]
pub async fn list_ranking(
    supabase: web::Data<Supabase>,
    tables: web::Data<TableSettings>,
) -> Result<HttpResponse, ReadError> {
    read_all(&supabase, &tables.ranking).await
}

#[tracing::instrument(name = "Listing scores", skip(supabase, tables))]
pub async fn list_scores(
    supabase: web::Data<Supabase>,
    tables: web::Data<TableSettings>,
) -> Result<HttpResponse, ReadError> {
    read_all(&supabase, &tables.scores).await
}

async fn read_all(supabase: &Supabase, source: &TableSource) -> Result<HttpResponse, ReadError> {
    let rows = supabase
        .table(&source.name)
        .select("*")
        .order_by(source.order.as_deref())
        .execute()
        .await
        .map_err(|e| ReadError {
            table: source.name.clone(),
            source: e,
        })?;

    Ok(HttpResponse::Ok().json(rows))
}
