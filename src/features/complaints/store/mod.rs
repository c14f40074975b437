use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::complaints::models::{Complaint, ComplaintStatus};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryComplaintStore;
pub use postgres::PgComplaintStore;

/// Aggregate complaint counts for the public dashboard.
#[derive(Debug, Clone, Default)]
pub struct StatusCounts {
    pub total: i64,
    pub submitted: i64,
    pub assigned: i64,
    pub in_progress: i64,
    pub resolved: i64,
    pub filed_this_week: i64,
    pub filed_this_month: i64,
}

/// Durable keyed storage for complaints.
///
/// Implementations must serialize `insert` and `append_history` per
/// `tracking_id` so the uniqueness check before insert and the
/// read-modify-write on append never race. Callers pass tracking ids
/// already canonicalized (trimmed, uppercased).
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Persist a new complaint atomically (record plus its initial history
    /// entry). Fails with `AppError::DuplicateId` when the tracking id is
    /// already taken; the record is never partially visible to readers.
    async fn insert(&self, complaint: Complaint) -> Result<Complaint>;

    /// Look up a complaint by its canonical tracking id. Not-found is an
    /// expected outcome, returned as `Ok(None)`.
    async fn find_by_tracking_id(&self, tracking_id: &str) -> Result<Option<Complaint>>;

    /// Atomically append a history entry and set the complaint's status to
    /// the entry's status. The entry timestamp is clamped so history stays
    /// non-decreasing. Fails with `AppError::NotFound` for unknown ids.
    async fn append_history(
        &self,
        tracking_id: &str,
        status: ComplaintStatus,
        details: &str,
    ) -> Result<Complaint>;

    /// Complaints filed under one submitter contact, newest first.
    async fn list_by_contact(&self, contact: &str) -> Result<Vec<Complaint>>;

    /// Aggregate counts by status plus filed-this-week/month totals.
    async fn status_counts(&self) -> Result<StatusCounts>;
}
