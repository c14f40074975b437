use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Datelike, Utc, Weekday};
use tokio::sync::Mutex;

use crate::core::error::{AppError, Result};
use crate::features::complaints::models::{Complaint, ComplaintStatus, HistoryEntry};
use crate::features::complaints::store::{ComplaintStore, StatusCounts};

/// Mutex-guarded map keyed by tracking id.
///
/// The single lock serializes every check-then-act sequence, which is all
/// the per-record serialization the store contract asks for. Used by the
/// test suite and for running the service without a database
/// (`STORE_BACKEND=memory`).
#[derive(Default)]
pub struct InMemoryComplaintStore {
    records: Mutex<HashMap<String, Complaint>>,
}

impl InMemoryComplaintStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored complaints (test visibility).
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

#[async_trait]
impl ComplaintStore for InMemoryComplaintStore {
    async fn insert(&self, complaint: Complaint) -> Result<Complaint> {
        let mut records = self.records.lock().await;
        if records.contains_key(&complaint.tracking_id) {
            return Err(AppError::DuplicateId(complaint.tracking_id));
        }
        records.insert(complaint.tracking_id.clone(), complaint.clone());
        Ok(complaint)
    }

    async fn find_by_tracking_id(&self, tracking_id: &str) -> Result<Option<Complaint>> {
        let records = self.records.lock().await;
        Ok(records.get(tracking_id).cloned())
    }

    async fn append_history(
        &self,
        tracking_id: &str,
        status: ComplaintStatus,
        details: &str,
    ) -> Result<Complaint> {
        let mut records = self.records.lock().await;
        let complaint = records.get_mut(tracking_id).ok_or_else(|| {
            AppError::NotFound(format!("Complaint '{}' not found", tracking_id))
        })?;

        // History stays non-decreasing even if the wall clock steps back.
        let last_recorded = complaint
            .history
            .last()
            .map(|e| e.recorded_at)
            .unwrap_or(complaint.created_at);
        let recorded_at = Utc::now().max(last_recorded);

        complaint.history.push(HistoryEntry {
            status,
            details: details.to_string(),
            recorded_at,
        });
        complaint.status = status;
        complaint.updated_at = recorded_at;

        Ok(complaint.clone())
    }

    async fn list_by_contact(&self, contact: &str) -> Result<Vec<Complaint>> {
        let records = self.records.lock().await;
        let mut matches: Vec<Complaint> = records
            .values()
            .filter(|c| c.submitter_contact == contact)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    async fn status_counts(&self) -> Result<StatusCounts> {
        let records = self.records.lock().await;

        let today = Utc::now().date_naive();
        let week_start = today.week(Weekday::Mon).first_day();
        let month_start = today.with_day(1).unwrap_or(today);

        let mut counts = StatusCounts::default();
        for complaint in records.values() {
            counts.total += 1;
            match complaint.status {
                ComplaintStatus::Submitted => counts.submitted += 1,
                ComplaintStatus::Assigned => counts.assigned += 1,
                ComplaintStatus::InProgress => counts.in_progress += 1,
                ComplaintStatus::Resolved => counts.resolved += 1,
            }
            let filed = complaint.created_at.date_naive();
            if filed >= week_start {
                counts.filed_this_week += 1;
            }
            if filed >= month_start {
                counts.filed_this_month += 1;
            }
        }

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tracking_id: &str, contact: &str) -> Complaint {
        Complaint::new(
            tracking_id.to_string(),
            "Asha".to_string(),
            contact.to_string(),
            "Road Potholes".to_string(),
            Some("MG Road".to_string()),
            "pothole on MG road".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_tracking_id() {
        let store = InMemoryComplaintStore::new();
        store.insert(sample("C-2507291234001", "9876543210")).await.unwrap();

        let err = store
            .insert(sample("C-2507291234001", "9876543211"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateId(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_returns_none_for_unknown_id() {
        let store = InMemoryComplaintStore::new();
        assert!(store
            .find_by_tracking_id("C-0000000000")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_append_history_unknown_id_is_not_found() {
        let store = InMemoryComplaintStore::new();
        let err = store
            .append_history("C-0000000000", ComplaintStatus::Assigned, "assigned")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_append_history_updates_status_and_history() {
        let store = InMemoryComplaintStore::new();
        store.insert(sample("C-2507291234002", "9876543210")).await.unwrap();

        let updated = store
            .append_history("C-2507291234002", ComplaintStatus::Resolved, "fixed")
            .await
            .unwrap();

        assert_eq!(updated.status, ComplaintStatus::Resolved);
        assert_eq!(updated.history.len(), 2);
        assert_eq!(updated.history.last().unwrap().status, ComplaintStatus::Resolved);
        assert!(updated.history[0].recorded_at <= updated.history[1].recorded_at);
    }

    #[tokio::test]
    async fn test_list_by_contact_newest_first() {
        let store = InMemoryComplaintStore::new();
        store.insert(sample("C-2507291234003", "9876543210")).await.unwrap();
        store.insert(sample("C-2507291234004", "9876543210")).await.unwrap();
        store.insert(sample("C-2507291234005", "9999999999")).await.unwrap();

        let mine = store.list_by_contact("9876543210").await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].created_at >= mine[1].created_at);
    }

    #[tokio::test]
    async fn test_status_counts() {
        let store = InMemoryComplaintStore::new();
        store.insert(sample("C-2507291234006", "9876543210")).await.unwrap();
        store.insert(sample("C-2507291234007", "9876543210")).await.unwrap();
        store
            .append_history("C-2507291234007", ComplaintStatus::Resolved, "done")
            .await
            .unwrap();

        let counts = store.status_counts().await.unwrap();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.submitted, 1);
        assert_eq!(counts.resolved, 1);
        assert_eq!(counts.filed_this_month, 2);
    }
}
