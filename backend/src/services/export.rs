//! Data export service
//!
//! Renders trend buckets as CSV for spreadsheets.

use crate::config::StatisticsConfig;
use crate::error::ApiError;
use crate::services::statistics::StatisticsService;
use healthtrack_shared::types::{TrendCsvRow, TrendRequest};
use serde::Serialize;
use tracing::{debug, instrument};

/// Data export service
pub struct ExportService;

impl ExportService {
    /// Export the buckets of a trend request as CSV
    ///
    /// Columns: `period_label,period_start,total`.
    #[instrument(skip_all, fields(records = req.records.len()))]
    pub fn export_trend_csv(
        settings: &StatisticsConfig,
        req: &TrendRequest,
    ) -> Result<String, ApiError> {
        let buckets = StatisticsService::buckets(settings, req)?;
        let rows: Vec<TrendCsvRow> = buckets.iter().map(TrendCsvRow::from).collect();
        debug!(rows = rows.len(), "Exporting trend");

        Self::to_csv(&rows)
    }

    fn to_csv<T: Serialize>(data: &[T]) -> Result<String, ApiError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e)))?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
    }
}
