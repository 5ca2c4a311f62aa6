//! booksum HTTP server
//!
//! Actix-web application serving the book summary form and the summary endpoint

pub mod error;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{http::header, middleware::Condition, web, App, HttpServer};
use booksum_common::{AppConfig, Result};
use booksum_llm::OpenAiClient;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use state::AppState;

/// CORS policy for the configured origin
///
/// Only installed when `CORS_ALLOWED_ORIGIN` is set; same-origin requests from
/// the bundled form never need it.
pub fn build_cors(config: &AppConfig) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
        None => Cors::default(),
    }
}

/// Build the provider handle and run the server until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let provider = Arc::new(OpenAiClient::from_config(&config)?);
    let state = web::Data::new(Arc::new(AppState::new(config.llm_model.clone(), provider)));

    let bind_addr = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if !serve_static {
        warn!(
            "Static directory {} not found, /static will not be served",
            static_dir.display()
        );
    }

    info!(
        "Starting server on http://{} (model: {})",
        bind_addr, config.llm_model
    );

    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .configure(routes::configure);
        let app = if serve_static {
            app.service(Files::new("/static", &static_dir))
        } else {
            app
        };
        let cors_enabled = config.cors_allowed_origin.is_some();
        app.wrap(Condition::new(cors_enabled, build_cors(&config)))
            .wrap(TracingLogger::default())
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
