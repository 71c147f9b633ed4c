use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{PersistedReport, ReportId, StoredReport};

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, report: PersistedReport) -> Result<PersistedReport, RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError>;
    /// Most recently inserted rows first.
    fn recent(&self, limit: usize) -> Result<Vec<StoredReport>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("report already exists")]
    Conflict,
    #[error("report not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Default)]
struct MemoryState {
    rows: HashMap<ReportId, StoredReport>,
    order: Vec<ReportId>,
}

/// Process-local repository used by the server and CLI.
#[derive(Default, Clone)]
pub struct InMemoryReportRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryReportRepository {
    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        self.lock().map(|state| state.order.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        self.len().map(|len| len == 0)
    }
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, report: PersistedReport) -> Result<PersistedReport, RepositoryError> {
        let mut state = self.lock()?;
        if state.rows.contains_key(&report.id) {
            return Err(RepositoryError::Conflict);
        }
        state.order.push(report.id);
        state.rows.insert(report.id, report.clone().into_stored());
        Ok(report)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        let state = self.lock()?;
        Ok(state.rows.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredReport>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .order
            .iter()
            .rev()
            .take(limit)
            .filter_map(|id| state.rows.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_lock_reports_unavailable() {
        let repository = InMemoryReportRepository::default();
        let state = repository.state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = state.lock().expect("first lock succeeds");
            panic!("repository writer crashed");
        })
        .join();

        assert!(matches!(
            repository.len(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.is_empty(),
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(matches!(
            repository.recent(5),
            Err(RepositoryError::Unavailable(_))
        ));
    }

    #[test]
    fn empty_repository_counts_zero() {
        let repository = InMemoryReportRepository::default();

        assert_eq!(repository.len().expect("len reads"), 0);
        assert!(repository.is_empty().expect("is_empty reads"));
    }
}
