use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{PersistedReport, ReportId, ReportView, StoredReport};
use super::repository::{ReportRepository, RepositoryError};
use crate::codec::parse_category;
use crate::extractor::{AttributeExtractor, ExtractionError};
use crate::grading::{AssessmentResult, Dimension, GradingEngine, ProductAttributes, TierConfig};

/// Service composing the extractor, grading engine and report repository.
pub struct ReportService<R, E> {
    repository: Arc<R>,
    extractor: Arc<E>,
    engine: Arc<GradingEngine>,
}

/// Result of grading a listing: the canonical assessment and what was stored for it.
#[derive(Debug, Clone, Serialize)]
pub struct AssessedReport {
    pub assessment: AssessmentResult,
    pub report: PersistedReport,
}

impl<R, E> ReportService<R, E>
where
    R: ReportRepository + 'static,
    E: AttributeExtractor + 'static,
{
    pub fn new(repository: Arc<R>, extractor: Arc<E>, tiers: TierConfig) -> Self {
        Self {
            repository,
            extractor,
            engine: Arc::new(GradingEngine::new(tiers)),
        }
    }

    pub fn engine(&self) -> &GradingEngine {
        &self.engine
    }

    /// Grade attributes without touching storage.
    pub fn grade(&self, attributes: &ProductAttributes) -> AssessmentResult {
        self.engine.grade(attributes)
    }

    /// Extract, grade and persist a listing. Extraction failures are returned untouched so
    /// the caller can decide whether to retry.
    pub async fn assess_url(&self, url: &str) -> Result<AssessedReport, ReportServiceError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ReportServiceError::InvalidUrl);
        }

        let attributes = self.extractor.extract(url).await.map_err(|err| {
            warn!(%url, error = %err, "attribute extraction failed");
            err
        })?;

        let assessment = self.engine.grade(&attributes);
        let report = PersistedReport::from_assessment(
            ReportId::generate(),
            url,
            &assessment,
            Utc::now(),
        );
        let report = self.repository.insert(report)?;

        info!(
            report_id = %report.id,
            brand = %assessment.brand,
            overall = assessment.overall.score.value(),
            grade = %assessment.overall.grade,
            "product graded"
        );

        Ok(AssessedReport { assessment, report })
    }

    /// Load a stored report, validating and decoding every categorical field.
    pub fn view(&self, id: &ReportId) -> Result<ReportView, ReportServiceError> {
        let stored = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(sanitize(&stored))
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<ReportView>, ReportServiceError> {
        let rows = self.repository.recent(limit)?;
        Ok(rows.iter().map(sanitize).collect())
    }
}

fn sanitize(stored: &StoredReport) -> ReportView {
    for dimension in Dimension::ALL {
        let raw = stored.category(dimension);
        if parse_category(dimension, raw).is_none() {
            warn!(
                report_id = %stored.id,
                %dimension,
                value = ?raw,
                "stored category unrecognized; using neutral default"
            );
        }
    }
    debug!(report_id = %stored.id, "decoding stored report");
    ReportView::from_stored(stored)
}

/// Error raised by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("product url must not be empty")]
    InvalidUrl,
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
