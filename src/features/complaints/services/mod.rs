pub mod complaint_service;
pub mod geocoding_service;

pub use complaint_service::ComplaintService;
pub use geocoding_service::GeocodingService;
