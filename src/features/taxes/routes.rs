use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::taxes::handlers;
use crate::features::taxes::service::TaxService;

/// Create routes for the taxes feature (public)
pub fn routes(service: Arc<TaxService>) -> Router {
    Router::new()
        .route("/api/taxes", get(handlers::list_taxes))
        .route("/api/taxes/{tax_id}/payments", post(handlers::pay_tax))
        .with_state(service)
}
