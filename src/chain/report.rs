//! Run reports and tallies

use serde::Serialize;
use serde_json::Value;

use super::case::CaseStatus;

/// Record of one case's outcome within a run, immutable once appended
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    /// Registry id of the case
    pub id: u64,
    pub status: CaseStatus,
    pub title: String,
    pub function_name: String,
    /// Transport-assigned request id, when the invocation produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Payload fields the case sent
    pub request: Value,
    /// Raw response payload, or the error message for errored cases
    pub response: Value,
}

/// Aggregate result of a run
///
/// Covers only the cases actually executed: a run stopped early by a
/// `Break` policy reports fewer entries than `total`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    /// Number of cases selected for the run
    pub total: usize,
    pub success: usize,
    pub failure: usize,
    /// Report entries in execution order
    pub reports: Vec<ReportEntry>,
}

/// Accumulates report entries and tallies during a run
#[derive(Default)]
pub(crate) struct ReportAggregator {
    success: usize,
    failure: usize,
    reports: Vec<ReportEntry>,
}

impl ReportAggregator {
    /// Append an entry, counting errors as failures
    pub fn push(&mut self, entry: ReportEntry) {
        match entry.status {
            CaseStatus::Success => self.success += 1,
            CaseStatus::Fail | CaseStatus::Error => self.failure += 1,
        }
        self.reports.push(entry);
    }

    pub fn success(&self) -> usize {
        self.success
    }

    pub fn failure(&self) -> usize {
        self.failure
    }

    /// Finalize into the run result
    pub fn finish(self, total: usize) -> BatchResult {
        BatchResult {
            total,
            success: self.success,
            failure: self.failure,
            reports: self.reports,
        }
    }
}
