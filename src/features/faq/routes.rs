use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::faq::handlers;
use crate::features::faq::service::FaqService;

/// Create routes for the FAQ feature (public)
pub fn routes(service: Arc<FaqService>) -> Router {
    Router::new()
        .route("/api/faqs", get(handlers::list_faqs))
        .with_state(service)
}
