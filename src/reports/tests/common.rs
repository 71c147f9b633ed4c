use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::codec::RawValue;
use crate::extractor::{AttributeExtractor, ExtractionError, PlaceholderExtractor};
use crate::grading::{ProductAttributes, TierConfig};
use crate::reports::domain::{PersistedReport, ReportId, StoredReport};
use crate::reports::repository::{InMemoryReportRepository, ReportRepository, RepositoryError};
use crate::reports::service::ReportService;

pub(super) fn patagonia_extractor() -> PlaceholderExtractor {
    PlaceholderExtractor::new(ProductAttributes {
        url: String::new(),
        brand: "Patagonia".to_string(),
        price: Some(600.0),
        materials: "organic cotton".to_string(),
        garment_type: "jacket".to_string(),
    })
}

pub(super) fn shein_extractor() -> PlaceholderExtractor {
    PlaceholderExtractor::new(ProductAttributes {
        url: String::new(),
        brand: "Shein".to_string(),
        price: Some(20.0),
        materials: "polyester".to_string(),
        garment_type: "dress".to_string(),
    })
}

pub(super) fn build_service<E>(
    extractor: E,
) -> (
    ReportService<InMemoryReportRepository, E>,
    Arc<InMemoryReportRepository>,
)
where
    E: AttributeExtractor + 'static,
{
    let repository = Arc::new(InMemoryReportRepository::default());
    let service = ReportService::new(
        repository.clone(),
        Arc::new(extractor),
        TierConfig::standard(),
    );
    (service, repository)
}

pub(super) struct FailingExtractor;

#[async_trait]
impl AttributeExtractor for FailingExtractor {
    async fn extract(&self, url: &str) -> Result<ProductAttributes, ExtractionError> {
        Err(ExtractionError::Network {
            url: url.to_string(),
            reason: "connection reset".to_string(),
        })
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _report: PersistedReport) -> Result<PersistedReport, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<StoredReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl ReportRepository for ConflictRepository {
    fn insert(&self, _report: PersistedReport) -> Result<PersistedReport, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<StoredReport>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Serves a single hand-edited row whose fields no longer match the schema.
pub(super) struct CorruptRepository {
    pub(super) row: StoredReport,
}

impl ReportRepository for CorruptRepository {
    fn insert(&self, report: PersistedReport) -> Result<PersistedReport, RepositoryError> {
        Ok(report)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        Ok((self.row.id == *id).then(|| self.row.clone()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<StoredReport>, RepositoryError> {
        Ok(vec![self.row.clone()])
    }
}

pub(super) fn corrupt_row() -> StoredReport {
    StoredReport {
        id: ReportId::generate(),
        url: "https://shop.example.com/legacy".to_string(),
        brand: "Legacy Brand".to_string(),
        materials: "wool".to_string(),
        quality: RawValue::from("Superb"),
        construction: RawValue::Null,
        durability: RawValue::Missing,
        ethics: RawValue::from("Positive"),
        overall_score: RawValue::from("not scored"),
        quality_explanation: String::new(),
        construction_explanation: String::new(),
        durability_explanation: String::new(),
        ethics_explanation: "Imported from the previous catalogue.".to_string(),
        overall_explanation: String::new(),
        created_at: Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
