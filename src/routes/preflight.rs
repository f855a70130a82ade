//! src/routes/preflight.rs
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_REQUEST_HEADERS,
    VARY,
};
use actix_web::{HttpRequest, HttpResponse};

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Answers CORS preflight requests for every path.
///
/// Requested headers are echoed back, so browsers may send any of them.
pub async fn preflight(req: HttpRequest) -> HttpResponse {
    let mut response = HttpResponse::NoContent();
    response.insert_header((ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS));

    if let Some(requested) = req.headers().get(ACCESS_CONTROL_REQUEST_HEADERS) {
        response
            .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, requested.clone()))
            .insert_header((VARY, "Access-Control-Request-Headers"));
    }

    response.finish()
}
