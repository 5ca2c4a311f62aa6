use actix_web::{web, HttpResponse};
use booksum_common::SummaryResponse;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::SummaryPayload;

/// POST /summary-endpoint - Summarize a book with one provider call
pub async fn create_summary(
    payload: web::Json<SummaryPayload>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner().validate()?;

    info!("Summary requested for \"{}\" by {}", request.book_name, request.author);

    let summary = state
        .summarizer
        .summarize(&request)
        .await
        .inspect_err(|e| error!("Error generating summary: {}", e))?;

    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}
