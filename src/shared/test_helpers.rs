#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use axum::Router;

#[cfg(test)]
use crate::core::config::GeocodingConfig;

#[cfg(test)]
use crate::core::content::MunicipalContent;

#[cfg(test)]
use crate::features::complaints::services::{ComplaintService, GeocodingService};

#[cfg(test)]
use crate::features::complaints::store::InMemoryComplaintStore;

#[cfg(test)]
pub fn test_complaint_service() -> Arc<ComplaintService> {
    let store = Arc::new(InMemoryComplaintStore::new());
    let geocoding = Arc::new(GeocodingService::new(GeocodingConfig {
        enabled: false,
        base_url: "https://nominatim.openstreetmap.org".to_string(),
        timeout: Duration::from_secs(2),
        country_codes: "in".to_string(),
    }));
    let categories = Arc::new(MunicipalContent::default_content().categories);
    Arc::new(ComplaintService::new(store, geocoding, categories))
}

/// Complaint routes (public + admin, unguarded) wired to an in-memory store.
#[cfg(test)]
pub fn test_router() -> Router {
    let service = test_complaint_service();
    Router::new()
        .merge(crate::features::complaints::routes::public_routes(Arc::clone(&service)))
        .merge(crate::features::complaints::routes::admin_routes(service))
}
