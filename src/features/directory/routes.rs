use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::directory::handlers;
use crate::features::directory::service::DirectoryService;

/// Create routes for the directory feature (public)
pub fn routes(service: Arc<DirectoryService>) -> Router {
    Router::new()
        .route("/api/departments", get(handlers::list_departments))
        .route("/api/wards/{ward_no}", get(handlers::get_ward))
        .with_state(service)
}
