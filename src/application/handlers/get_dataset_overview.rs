//! GetDatasetOverviewHandler - Query handler for dataset statistics.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{AnalyticsProvider, DatasetOverview};

/// Query for the pre-aggregated dataset overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetDatasetOverviewQuery;

/// Handler for retrieving dataset statistics.
///
/// Pass-through over the analytics port; the statistics are display-only and
/// never validated here.
pub struct GetDatasetOverviewHandler {
    analytics: Arc<dyn AnalyticsProvider>,
}

impl GetDatasetOverviewHandler {
    pub fn new(analytics: Arc<dyn AnalyticsProvider>) -> Self {
        Self { analytics }
    }

    pub async fn handle(
        &self,
        _query: GetDatasetOverviewQuery,
    ) -> Result<DatasetOverview, DomainError> {
        self.analytics
            .dataset_overview()
            .await
            .map_err(|e| DomainError::new(ErrorCode::AnalyticsUnavailable, e.to_string()))
    }
}
