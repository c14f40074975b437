use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::complaints::handlers;
use crate::features::complaints::services::ComplaintService;

/// Public complaint routes: filing, tracking and own-complaint listing
pub fn public_routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route(
            "/api/complaints",
            post(handlers::file_complaint).get(handlers::list_complaints),
        )
        .route(
            "/api/complaints/{tracking_id}",
            get(handlers::track_complaint),
        )
        .with_state(service)
}

/// Administrative complaint routes (status advancement). Guarded with basic
/// auth in `main` when credentials are configured.
pub fn admin_routes(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route(
            "/api/complaints/{tracking_id}/history",
            post(handlers::append_history),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::shared::test_helpers::test_router;

    #[tokio::test]
    async fn test_post_complaint_returns_201_with_tracking_id() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/api/complaints")
            .json(&json!({
                "submitter": {"name": "Asha", "contact": "9876543210"},
                "category": "Road Potholes",
                "description": "pothole on MG road"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "Submitted");
        let tracking_id = body["data"]["trackingId"].as_str().unwrap();
        assert!(tracking_id.starts_with("C-"));
    }

    #[tokio::test]
    async fn test_post_complaint_missing_fields_returns_400_with_details() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/api/complaints")
            .json(&json!({
                "submitter": {"name": "", "contact": ""},
                "category": "",
                "description": ""
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(!body["errors"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_track_unknown_id_returns_404() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server.get("/api/complaints/C-DOES-NOT-EXIST").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_file_then_track_then_advance_flow() {
        let server = TestServer::new(test_router()).unwrap();

        let filed = server
            .post("/api/complaints")
            .json(&json!({
                "submitter": {"name": "Asha", "contact": "9876543210"},
                "category": "Road Potholes",
                "address": "MG Road",
                "description": "pothole on MG road"
            }))
            .await;
        filed.assert_status(StatusCode::CREATED);
        let filed_body: serde_json::Value = filed.json();
        let tracking_id = filed_body["data"]["trackingId"].as_str().unwrap().to_string();

        let tracked = server
            .get(&format!("/api/complaints/{}", tracking_id))
            .await;
        tracked.assert_status(StatusCode::OK);
        let tracked_body: serde_json::Value = tracked.json();
        assert_eq!(tracked_body["data"]["status"], "Submitted");
        assert_eq!(tracked_body["data"]["history"].as_array().unwrap().len(), 1);

        let advanced = server
            .post(&format!("/api/complaints/{}/history", tracking_id))
            .json(&json!({"status": "Resolved", "details": "fixed"}))
            .await;
        advanced.assert_status(StatusCode::OK);
        let advanced_body: serde_json::Value = advanced.json();
        assert_eq!(advanced_body["data"]["status"], "Resolved");
        assert_eq!(
            advanced_body["data"]["history"].as_array().unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_advance_unknown_id_returns_404() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/api/complaints/C-0000000000/history")
            .json(&json!({"status": "Assigned", "details": "assigned"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_complaints_by_contact() {
        let server = TestServer::new(test_router()).unwrap();

        for _ in 0..2 {
            server
                .post("/api/complaints")
                .json(&json!({
                    "submitter": {"name": "Asha", "contact": "9876543210"},
                    "category": "Garbage & Sanitation",
                    "description": "overflowing bins near the park"
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server.get("/api/complaints?contact=9876543210").await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["meta"]["total"], 2);
    }
}
