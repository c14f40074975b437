pub mod dto;
pub mod handlers;
pub mod routes;
pub mod service;

pub use service::DashboardService;
