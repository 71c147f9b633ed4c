//! Report intake and retrieval: extraction, grading, persistence and read-back decoding.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{DimensionView, PersistedReport, ReportId, ReportView, StoredReport};
pub use repository::{InMemoryReportRepository, ReportRepository, RepositoryError};
pub use router::report_router;
pub use service::{AssessedReport, ReportService, ReportServiceError};
