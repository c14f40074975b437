use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::config::DatabaseConfig;
use crate::core::error::{AppError, Result};
use crate::features::complaints::models::{
    Complaint, ComplaintStatus, HistoryEntry, ResolvedLocation,
};
use crate::features::complaints::store::{ComplaintStore, StatusCounts};

/// PostgreSQL-backed complaint store.
///
/// `insert` writes the complaint row and its initial history entry in one
/// transaction; `append_history` locks the complaint row (`FOR UPDATE`) so
/// concurrent appends to the same record serialize. Queries use the runtime
/// sqlx API, so the crate builds without a live database.
pub struct PgComplaintStore {
    pool: PgPool,
}

impl PgComplaintStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the connection pool from config and wrap it.
    pub async fn connect(config: &DatabaseConfig) -> std::result::Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded schema migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[derive(Debug, FromRow)]
struct ComplaintRow {
    id: Uuid,
    tracking_id: String,
    submitter_name: String,
    submitter_contact: String,
    category: String,
    address: Option<String>,
    description: String,
    status: String,
    location_display_name: Option<String>,
    location_lat: Option<f64>,
    location_lon: Option<f64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct HistoryRow {
    status: String,
    details: String,
    recorded_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct CountsRow {
    total: i64,
    submitted: i64,
    assigned: i64,
    in_progress: i64,
    resolved: i64,
    filed_this_week: i64,
    filed_this_month: i64,
}

const SELECT_COMPLAINT: &str = r#"
    SELECT id, tracking_id, submitter_name, submitter_contact, category,
           address, description, status,
           location_display_name, location_lat, location_lon,
           created_at, updated_at
    FROM complaints
"#;

fn parse_status(raw: &str) -> Result<ComplaintStatus> {
    raw.parse()
        .map_err(|e: String| AppError::Internal(format!("Corrupt status column: {}", e)))
}

fn assemble(row: ComplaintRow, history_rows: Vec<HistoryRow>) -> Result<Complaint> {
    let mut history = Vec::with_capacity(history_rows.len());
    for h in history_rows {
        history.push(HistoryEntry {
            status: parse_status(&h.status)?,
            details: h.details,
            recorded_at: h.recorded_at,
        });
    }

    let location = row.location_display_name.map(|display_name| ResolvedLocation {
        display_name,
        lat: row.location_lat,
        lon: row.location_lon,
    });

    Ok(Complaint {
        id: row.id,
        tracking_id: row.tracking_id,
        submitter_name: row.submitter_name,
        submitter_contact: row.submitter_contact,
        category: row.category,
        address: row.address,
        description: row.description,
        status: parse_status(&row.status)?,
        history,
        location,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

/// Transient pool/connection failures surface as `StoreUnavailable` so the
/// client sees a retryable 503 instead of a generic server error.
fn map_db_err(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::StoreUnavailable(e.to_string())
        }
        other => AppError::Database(other),
    }
}

impl PgComplaintStore {
    async fn load_history(&self, complaint_id: Uuid) -> Result<Vec<HistoryRow>> {
        sqlx::query_as::<_, HistoryRow>(
            "SELECT status, details, recorded_at FROM complaint_history \
             WHERE complaint_id = $1 ORDER BY id",
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load complaint history: {:?}", e);
            map_db_err(e)
        })
    }
}

#[async_trait]
impl ComplaintStore for PgComplaintStore {
    async fn insert(&self, complaint: Complaint) -> Result<Complaint> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        let insert_result = sqlx::query(
            "INSERT INTO complaints \
             (id, tracking_id, submitter_name, submitter_contact, category, address, \
              description, status, location_display_name, location_lat, location_lon, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(complaint.id)
        .bind(&complaint.tracking_id)
        .bind(&complaint.submitter_name)
        .bind(&complaint.submitter_contact)
        .bind(&complaint.category)
        .bind(&complaint.address)
        .bind(&complaint.description)
        .bind(complaint.status.to_string())
        .bind(complaint.location.as_ref().map(|l| l.display_name.clone()))
        .bind(complaint.location.as_ref().and_then(|l| l.lat))
        .bind(complaint.location.as_ref().and_then(|l| l.lon))
        .bind(complaint.created_at)
        .bind(complaint.updated_at)
        .execute(&mut *tx)
        .await;

        if let Err(e) = insert_result {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                return Err(AppError::DuplicateId(complaint.tracking_id));
            }
            tracing::error!("Failed to insert complaint: {:?}", e);
            return Err(map_db_err(e));
        }

        for entry in &complaint.history {
            sqlx::query(
                "INSERT INTO complaint_history (complaint_id, status, details, recorded_at) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(complaint.id)
            .bind(entry.status.to_string())
            .bind(&entry.details)
            .bind(entry.recorded_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert initial history entry: {:?}", e);
                map_db_err(e)
            })?;
        }

        tx.commit().await.map_err(map_db_err)?;

        tracing::info!(
            "Complaint persisted: tracking_id={}, category={}",
            complaint.tracking_id,
            complaint.category
        );

        Ok(complaint)
    }

    async fn find_by_tracking_id(&self, tracking_id: &str) -> Result<Option<Complaint>> {
        let row = sqlx::query_as::<_, ComplaintRow>(
            &format!("{} WHERE tracking_id = $1", SELECT_COMPLAINT),
        )
        .bind(tracking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find complaint: {:?}", e);
            map_db_err(e)
        })?;

        match row {
            Some(row) => {
                let history = self.load_history(row.id).await?;
                Ok(Some(assemble(row, history)?))
            }
            None => Ok(None),
        }
    }

    async fn append_history(
        &self,
        tracking_id: &str,
        status: ComplaintStatus,
        details: &str,
    ) -> Result<Complaint> {
        let mut tx = self.pool.begin().await.map_err(map_db_err)?;

        // Row lock serializes concurrent appends for this tracking id.
        let row = sqlx::query_as::<_, ComplaintRow>(
            &format!("{} WHERE tracking_id = $1 FOR UPDATE", SELECT_COMPLAINT),
        )
        .bind(tracking_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to lock complaint row: {:?}", e);
            map_db_err(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Complaint '{}' not found", tracking_id)))?;

        let mut history_rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT status, details, recorded_at FROM complaint_history \
             WHERE complaint_id = $1 ORDER BY id",
        )
        .bind(row.id)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_err)?;

        // History stays non-decreasing even if the wall clock steps back.
        let last_recorded = history_rows
            .last()
            .map(|h| h.recorded_at)
            .unwrap_or(row.created_at);
        let recorded_at = Utc::now().max(last_recorded);

        sqlx::query(
            "INSERT INTO complaint_history (complaint_id, status, details, recorded_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(row.id)
        .bind(status.to_string())
        .bind(details)
        .bind(recorded_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to append history entry: {:?}", e);
            map_db_err(e)
        })?;

        sqlx::query("UPDATE complaints SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(row.id)
            .bind(status.to_string())
            .bind(recorded_at)
            .execute(&mut *tx)
            .await
            .map_err(map_db_err)?;

        tx.commit().await.map_err(map_db_err)?;

        history_rows.push(HistoryRow {
            status: status.to_string(),
            details: details.to_string(),
            recorded_at,
        });

        let updated = ComplaintRow {
            status: status.to_string(),
            updated_at: recorded_at,
            ..row
        };

        tracing::info!(
            "Complaint status advanced: tracking_id={}, status={}",
            tracking_id,
            status
        );

        assemble(updated, history_rows)
    }

    async fn list_by_contact(&self, contact: &str) -> Result<Vec<Complaint>> {
        let rows = sqlx::query_as::<_, ComplaintRow>(
            &format!(
                "{} WHERE submitter_contact = $1 ORDER BY created_at DESC",
                SELECT_COMPLAINT
            ),
        )
        .bind(contact)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list complaints by contact: {:?}", e);
            map_db_err(e)
        })?;

        let mut complaints = Vec::with_capacity(rows.len());
        for row in rows {
            let history = self.load_history(row.id).await?;
            complaints.push(assemble(row, history)?);
        }
        Ok(complaints)
    }

    async fn status_counts(&self) -> Result<StatusCounts> {
        let counts = sqlx::query_as::<_, CountsRow>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'Submitted') AS submitted,
                COUNT(*) FILTER (WHERE status = 'Assigned') AS assigned,
                COUNT(*) FILTER (WHERE status = 'In Progress') AS in_progress,
                COUNT(*) FILTER (WHERE status = 'Resolved') AS resolved,
                COUNT(*) FILTER (WHERE created_at >= date_trunc('week', CURRENT_DATE)) AS filed_this_week,
                COUNT(*) FILTER (WHERE created_at >= date_trunc('month', CURRENT_DATE)) AS filed_this_month
            FROM complaints
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to aggregate status counts: {:?}", e);
            map_db_err(e)
        })?;

        Ok(StatusCounts {
            total: counts.total,
            submitted: counts.submitted,
            assigned: counts.assigned,
            in_progress: counts.in_progress,
            resolved: counts.resolved,
            filed_this_week: counts.filed_this_week,
            filed_this_month: counts.filed_this_month,
        })
    }
}
