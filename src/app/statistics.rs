//! End-of-run summary.

use log::{info, warn};

use crate::run::TamperReport;

/// Logs the closing summary of a run: counts per outcome and, if anything
/// failed, the failures per category.
pub fn log_run_summary(report: &TamperReport) {
    info!(
        "Verb tampering against {} finished: {} completed, {} failed, {} warning{} in {:.1}s",
        report.target,
        report.completed(),
        report.failed(),
        report.warnings(),
        if report.warnings() == 1 { "" } else { "s" },
        report.elapsed_seconds
    );

    let total = report.failures.total_errors();
    if total > 0 {
        warn!("{total} failed request{} by category:", if total == 1 { "" } else { "s" });
        for (error_type, count) in report.failures.non_zero() {
            warn!("   {}: {}", error_type.as_str(), count);
        }
    }
}
