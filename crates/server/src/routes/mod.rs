pub mod index;
pub mod summary;
pub mod system;

use actix_web::web;

use crate::error::{json_error_handler, method_not_allowed};

/// Register every route of the application
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index)
        .service(index::add_summary)
        .service(system::health)
        .service(
            web::resource("/summary-endpoint")
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .route(web::post().to(summary::create_summary))
                .default_service(web::to(method_not_allowed)),
        );
}
