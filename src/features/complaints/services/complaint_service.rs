use std::sync::Arc;

use rand::Rng;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::complaints::dtos::{
    AppendHistoryDto, ComplaintResponseDto, FileComplaintDto,
};
use crate::features::complaints::models::Complaint;
use crate::features::complaints::services::GeocodingService;
use crate::features::complaints::store::ComplaintStore;
use crate::shared::constants::{
    MAX_ID_ATTEMPTS, TRACKING_ID_PREFIX, TRACKING_ID_RANDOM_DIGITS,
};
use crate::shared::validation::{collect_field_errors, normalize_tracking_id};

/// Complaint lifecycle service: submission validity, identifier issuance
/// and store orchestration. The sole authority for tracking ids.
pub struct ComplaintService {
    store: Arc<dyn ComplaintStore>,
    geocoding: Arc<GeocodingService>,
    categories: Arc<Vec<String>>,
}

/// Generate a candidate tracking id: the `C-` prefix, a `yymmddHHMM` time
/// component, and a random suffix. Uniqueness is enforced by the store on
/// insert, not here.
fn generate_tracking_id() -> String {
    let time_part = chrono::Utc::now().format("%y%m%d%H%M");
    let bound = 10u32.pow(TRACKING_ID_RANDOM_DIGITS as u32);
    let random_part = rand::thread_rng().gen_range(0..bound);
    format!(
        "{}{}{:0width$}",
        TRACKING_ID_PREFIX,
        time_part,
        random_part,
        width = TRACKING_ID_RANDOM_DIGITS
    )
}

impl ComplaintService {
    pub fn new(
        store: Arc<dyn ComplaintStore>,
        geocoding: Arc<GeocodingService>,
        categories: Arc<Vec<String>>,
    ) -> Self {
        Self {
            store,
            geocoding,
            categories,
        }
    }

    /// File a new complaint: validate, issue a tracking id (regenerating on
    /// the rare store collision, up to a bounded retry count), persist and
    /// return the created record.
    pub async fn file(&self, dto: FileComplaintDto) -> Result<ComplaintResponseDto> {
        let mut field_errors = match dto.validate() {
            Ok(()) => Vec::new(),
            Err(e) => collect_field_errors(&e),
        };
        if !dto.category.trim().is_empty() && !self.categories.contains(&dto.category) {
            field_errors.push(format!("category: unknown category '{}'", dto.category));
        }
        if !field_errors.is_empty() {
            return Err(AppError::Validation(field_errors));
        }

        // Best-effort enrichment; failure or timeout degrades to the
        // manually entered address and never blocks filing.
        let location = match dto.address.as_deref() {
            Some(address) => self.geocoding.resolve_best_effort(address).await,
            None => None,
        };

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let tracking_id = generate_tracking_id();
            let complaint = Complaint::new(
                tracking_id,
                dto.submitter.name.clone(),
                dto.submitter.contact.clone(),
                dto.category.clone(),
                dto.address.clone(),
                dto.description.clone(),
                location.clone(),
            );

            match self.store.insert(complaint).await {
                Ok(persisted) => {
                    tracing::info!(
                        "Complaint filed: tracking_id={}, category={}",
                        persisted.tracking_id,
                        persisted.category
                    );
                    return Ok(persisted.into());
                }
                Err(AppError::DuplicateId(id)) => {
                    tracing::warn!(
                        "Tracking id collision (attempt {}/{}): {}",
                        attempt,
                        MAX_ID_ATTEMPTS,
                        id
                    );
                }
                Err(other) => return Err(other),
            }
        }

        Err(AppError::IdExhaustion(MAX_ID_ATTEMPTS))
    }

    /// Look up a complaint by tracking id. Input is normalized (trim +
    /// uppercase) before lookup. Not-found is an expected outcome and comes
    /// back as `Ok(None)`, never an error.
    pub async fn track(&self, raw_tracking_id: &str) -> Result<Option<ComplaintResponseDto>> {
        let tracking_id = normalize_tracking_id(raw_tracking_id);
        let complaint = self.store.find_by_tracking_id(&tracking_id).await?;
        Ok(complaint.map(|c| c.into()))
    }

    /// Administrative path: append a status transition to a complaint's
    /// history. Any status may follow any status; the store keeps history
    /// timestamps monotonic.
    pub async fn advance(
        &self,
        raw_tracking_id: &str,
        dto: AppendHistoryDto,
    ) -> Result<ComplaintResponseDto> {
        dto.validate()
            .map_err(|e| AppError::Validation(collect_field_errors(&e)))?;

        let tracking_id = normalize_tracking_id(raw_tracking_id);
        let updated = self
            .store
            .append_history(&tracking_id, dto.status, &dto.details)
            .await?;

        tracing::info!(
            "Complaint advanced: tracking_id={}, status={}",
            updated.tracking_id,
            updated.status
        );

        Ok(updated.into())
    }

    /// A citizen's own complaints, newest first.
    pub async fn list_by_contact(&self, contact: &str) -> Result<Vec<ComplaintResponseDto>> {
        let complaints = self.store.list_by_contact(contact.trim()).await?;
        Ok(complaints.into_iter().map(|c| c.into()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GeocodingConfig;
    use crate::core::content::MunicipalContent;
    use crate::features::complaints::dtos::SubmitterDto;
    use crate::features::complaints::models::ComplaintStatus;
    use crate::features::complaints::store::InMemoryComplaintStore;
    use crate::shared::validation::TRACKING_ID_REGEX;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use std::time::Duration;

    fn test_service() -> (Arc<InMemoryComplaintStore>, ComplaintService) {
        let store = Arc::new(InMemoryComplaintStore::new());
        let geocoding = Arc::new(GeocodingService::new(GeocodingConfig {
            enabled: false,
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            timeout: Duration::from_secs(2),
            country_codes: "in".to_string(),
        }));
        let categories = Arc::new(MunicipalContent::default_content().categories);
        let service = ComplaintService::new(store.clone(), geocoding, categories);
        (store, service)
    }

    fn asha_pothole() -> FileComplaintDto {
        FileComplaintDto {
            submitter: SubmitterDto {
                name: "Asha".to_string(),
                contact: "9876543210".to_string(),
            },
            category: "Road Potholes".to_string(),
            address: None,
            description: "pothole on MG road".to_string(),
        }
    }

    #[test]
    fn test_generated_tracking_id_matches_format() {
        for _ in 0..50 {
            let id = generate_tracking_id();
            assert!(
                TRACKING_ID_REGEX.is_match(&id),
                "generated id '{}' does not match the tracking format",
                id
            );
        }
    }

    #[tokio::test]
    async fn test_file_returns_submitted_complaint_with_one_history_entry() {
        let (_, service) = test_service();
        let filed = service.file(asha_pothole()).await.unwrap();

        assert!(TRACKING_ID_REGEX.is_match(&filed.tracking_id));
        assert_eq!(filed.status, ComplaintStatus::Submitted);
        assert_eq!(filed.history.len(), 1);

        let tracked = service.track(&filed.tracking_id).await.unwrap().unwrap();
        assert_eq!(tracked.tracking_id, filed.tracking_id);
        assert_eq!(tracked.history.len(), 1);
        assert_eq!(tracked.history[0].status, ComplaintStatus::Submitted);
    }

    #[tokio::test]
    async fn test_file_empty_description_fails_and_creates_nothing() {
        let (store, service) = test_service();
        let mut dto = asha_pothole();
        dto.description = "".to_string();

        let err = service.file(dto).await.unwrap_err();
        match err {
            AppError::Validation(fields) => {
                assert!(fields.iter().any(|f| f.starts_with("description")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_file_empty_category_fails_and_creates_nothing() {
        let (store, service) = test_service();
        let mut dto = asha_pothole();
        dto.category = "".to_string();

        let err = service.file(dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_file_unknown_category_fails() {
        let (store, service) = test_service();
        let mut dto = asha_pothole();
        dto.category = "Time Travel".to_string();

        let err = service.file(dto).await.unwrap_err();
        match err {
            AppError::Validation(fields) => {
                assert!(fields.iter().any(|f| f.contains("unknown category")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_file_missing_contact_fails() {
        let (store, service) = test_service();
        let mut dto = asha_pothole();
        dto.submitter.contact = "".to_string();

        let err = service.file(dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_filings_yield_unique_tracking_ids() {
        let (store, service) = test_service();
        let service = Arc::new(service);

        let mut handles = Vec::new();
        for _ in 0..100 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let mut dto = asha_pothole();
                dto.submitter.name = Name().fake();
                service.file(dto).await.unwrap().tracking_id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            assert!(ids.insert(handle.await.unwrap()));
        }
        assert_eq!(ids.len(), 100);
        assert_eq!(store.len().await, 100);
    }

    #[tokio::test]
    async fn test_track_is_case_insensitive_and_trims() {
        let (_, service) = test_service();
        let filed = service.file(asha_pothole()).await.unwrap();

        let sloppy = format!("  {}  ", filed.tracking_id.to_lowercase());
        let tracked = service.track(&sloppy).await.unwrap().unwrap();
        assert_eq!(tracked.tracking_id, filed.tracking_id);
    }

    #[tokio::test]
    async fn test_track_unknown_id_is_a_plain_none() {
        let (_, service) = test_service();
        let result = service.track("C-DOES-NOT-EXIST").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_advance_unknown_id_is_not_found_and_creates_nothing() {
        let (store, service) = test_service();
        let err = service
            .advance(
                "C-0000000000",
                AppendHistoryDto {
                    status: ComplaintStatus::Assigned,
                    details: "assigned to sanitation".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_file_track_advance_resolve_scenario() {
        let (_, service) = test_service();

        let filed = service.file(asha_pothole()).await.unwrap();
        assert_eq!(filed.status, ComplaintStatus::Submitted);

        let advanced = service
            .advance(
                &filed.tracking_id,
                AppendHistoryDto {
                    status: ComplaintStatus::Resolved,
                    details: "fixed".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(advanced.status, ComplaintStatus::Resolved);
        assert_eq!(advanced.history.len(), 2);

        let tracked = service.track(&filed.tracking_id).await.unwrap().unwrap();
        assert_eq!(tracked.status, ComplaintStatus::Resolved);
        assert_eq!(tracked.history.last().unwrap().status, ComplaintStatus::Resolved);
        for pair in tracked.history.windows(2) {
            assert!(pair[0].recorded_at <= pair[1].recorded_at);
        }
    }

    #[tokio::test]
    async fn test_advance_permits_any_transition_including_reopen() {
        let (_, service) = test_service();
        let filed = service.file(asha_pothole()).await.unwrap();

        for (status, details) in [
            (ComplaintStatus::Resolved, "closed early"),
            (ComplaintStatus::InProgress, "reopened, crew dispatched"),
        ] {
            service
                .advance(
                    &filed.tracking_id,
                    AppendHistoryDto {
                        status,
                        details: details.to_string(),
                    },
                )
                .await
                .unwrap();
        }

        let tracked = service.track(&filed.tracking_id).await.unwrap().unwrap();
        assert_eq!(tracked.status, ComplaintStatus::InProgress);
        assert_eq!(tracked.history.len(), 3);
    }

    #[tokio::test]
    async fn test_list_by_contact_returns_own_complaints_only() {
        let (_, service) = test_service();
        service.file(asha_pothole()).await.unwrap();
        service.file(asha_pothole()).await.unwrap();

        let mut other = asha_pothole();
        other.submitter.contact = "9999999999".to_string();
        service.file(other).await.unwrap();

        let mine = service.list_by_contact("9876543210").await.unwrap();
        assert_eq!(mine.len(), 2);
        let theirs = service.list_by_contact("9999999999").await.unwrap();
        assert_eq!(theirs.len(), 1);
    }
}
