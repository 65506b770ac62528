//! Metrics collection.
//!
//! # Metrics
//! - `token_transfers_total` (counter): transfers by `outcome` (sent, failed)
//! - `token_distribution_failed_transfers` (gauge): failures in the last run

use crate::distribution::report::DistributionReport;

pub fn record_transfer(sent: bool) {
    let outcome = if sent { "sent" } else { "failed" };
    metrics::counter!("token_transfers_total", "outcome" => outcome).increment(1);
}

pub fn record_run(report: &DistributionReport) {
    metrics::gauge!("token_distribution_failed_transfers").set(report.failed_count() as f64);
}
