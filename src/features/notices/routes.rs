use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::notices::handlers;
use crate::features::notices::service::NoticeService;

/// Create routes for the notices feature (public)
pub fn routes(service: Arc<NoticeService>) -> Router {
    Router::new()
        .route("/api/notices", get(handlers::list_notices))
        .with_state(service)
}
