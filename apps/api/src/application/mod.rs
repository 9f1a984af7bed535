pub mod browse;
pub mod dashboard;
pub mod export;
pub mod location;
pub mod map;
pub mod statistics;
pub mod submit_contribution;
pub mod submit_place;

use crate::domain::shared::errors::DomainError;
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

/// Degrades a failed store read to an empty value so views render "no data"
/// instead of failing.
pub fn or_empty<T: Default>(result: Result<T, DomainError>, operation: &str) -> T {
    result.unwrap_or_else(|err| {
        tracing::warn!(operation, error = %err, "store read failed, rendering empty result");
        T::default()
    })
}

/// Trims free text and drops values that are blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returned by both submission flows once the record is stored.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub file_url: Option<String>,
    /// Informational messages such as a failed address lookup.
    pub notices: Vec<String>,
}
