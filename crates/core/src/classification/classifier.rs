//! Success/failure verdict over a bulk operation
//!
//! The default verdict is a plain substring scan of the combined response
//! text. A marker inside an otherwise successful payload still fails the
//! whole batch; callers depend on that contract, so the scan is not made
//! smarter. [`ClassificationMode::StructuredStatus`] judges the per-item HTTP
//! status instead and is opt-in.

use graphlist_domain::constants::FAILURE_MARKERS;
use graphlist_domain::{AggregateResult, BulkReport, ClassificationMode};
use tracing::debug;

/// Whether `text` contains any of the known failure markers.
pub fn contains_failure_marker(text: &str) -> bool {
    FAILURE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Classify combined response text. The text is carried unchanged in either
/// variant.
pub fn classify(combined_text: impl Into<String>) -> AggregateResult {
    let combined_text = combined_text.into();
    if contains_failure_marker(&combined_text) {
        AggregateResult::Failure(combined_text)
    } else {
        AggregateResult::Success(combined_text)
    }
}

/// Classifier bound to a [`ClassificationMode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultClassifier {
    mode: ClassificationMode,
}

impl ResultClassifier {
    /// Classifier using `mode`.
    pub fn new(mode: ClassificationMode) -> Self {
        Self { mode }
    }

    /// The configured mode.
    pub fn mode(&self) -> ClassificationMode {
        self.mode
    }

    /// Classify a finished bulk report. The payload is always the report's
    /// combined text.
    pub fn classify_report(&self, report: &BulkReport) -> AggregateResult {
        let combined = report.combined_text();

        match self.mode {
            ClassificationMode::MarkerScan => classify(combined),
            ClassificationMode::StructuredStatus => {
                let failed = report
                    .outcomes()
                    .iter()
                    .filter(|outcome| outcome.status.map_or(true, |status| status >= 400))
                    .count();

                debug!(failed, total = report.len(), "structured classification");

                if failed > 0 {
                    AggregateResult::Failure(combined)
                } else {
                    AggregateResult::Success(combined)
                }
            }
        }
    }
}
