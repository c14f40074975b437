use std::sync::Arc;

use crate::core::error::Result;
use crate::features::complaints::store::ComplaintStore;
use crate::features::dashboard::dto::DashboardSummaryDto;

/// Service for public dashboard queries.
pub struct DashboardService {
    store: Arc<dyn ComplaintStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn ComplaintStore>) -> Self {
        Self { store }
    }

    /// Get lightweight summary counts for the dashboard header
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let counts = self.store.status_counts().await?;
        Ok(counts.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::complaints::models::{Complaint, ComplaintStatus};
    use crate::features::complaints::store::InMemoryComplaintStore;

    #[tokio::test]
    async fn test_summary_reflects_store_contents() {
        let store = Arc::new(InMemoryComplaintStore::new());
        for i in 0..3 {
            store
                .insert(Complaint::new(
                    format!("C-250729123400{}", i),
                    "Asha".to_string(),
                    "9876543210".to_string(),
                    "Road Potholes".to_string(),
                    None,
                    "pothole on MG road".to_string(),
                    None,
                ))
                .await
                .unwrap();
        }
        store
            .append_history("C-2507291234000", ComplaintStatus::Resolved, "done")
            .await
            .unwrap();

        let service = DashboardService::new(store);
        let summary = service.get_summary().await.unwrap();
        assert_eq!(summary.total_complaints, 3);
        assert_eq!(summary.submitted, 2);
        assert_eq!(summary.resolved, 1);
    }
}
