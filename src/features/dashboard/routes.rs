use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::service::DashboardService;

/// Create public dashboard routes
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/summary", get(handlers::get_summary))
        .with_state(service)
}
