use actix_web::{get, http::header::ContentType, web, HttpResponse};
use tracing::debug;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

fn form_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// GET / - Book summary form
#[get("/")]
pub async fn index() -> HttpResponse {
    form_page()
}

/// GET /summaries/add/{kind} - Same form under the summary-creation path
///
/// Every kind gets the one form; the segment is only logged.
#[get("/summaries/add/{kind}")]
pub async fn add_summary(kind: web::Path<String>) -> HttpResponse {
    debug!("Summary form requested for kind {}", kind);
    form_page()
}
