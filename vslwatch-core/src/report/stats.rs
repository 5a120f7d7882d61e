use crate::engine::Verdict;
use crate::report::histogram::{Bucket, LATENCY_BUCKETS_MS, LatencyHistogram};
use crate::report::types::TransactionReport;
use serde::Serialize;

/// Running counters over every transaction the engine has seen end.
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    total: u64,
    reported: u64,
    hits: u64,
    misses: u64,
    superseded: u64,
    latency: LatencyHistogram,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self {
            total: 0,
            reported: 0,
            hits: 0,
            misses: 0,
            superseded: 0,
            latency: LatencyHistogram::new(LATENCY_BUCKETS_MS),
        }
    }
}

impl StatsAggregator {
    /// Counted for every terminal record, known transaction or not.
    pub(crate) fn record_end(&mut self) {
        self.total += 1;
    }

    pub(crate) fn record_completed(&mut self, report: &TransactionReport) {
        match report.verdict {
            Verdict::Hit => self.hits += 1,
            Verdict::Miss => self.misses += 1,
        }
        self.latency.record(report.round_trip_ms);
    }

    pub(crate) fn record_reported(&mut self) {
        self.reported += 1;
    }

    pub(crate) fn record_superseded(&mut self) {
        self.superseded += 1;
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn snapshot(&self) -> Summary {
        Summary {
            total: self.total,
            reported: self.reported,
            hits: self.hits,
            misses: self.misses,
            superseded: self.superseded,
            p95_ms: self.latency.percentile(0.95),
            p99_ms: self.latency.percentile(0.99),
            latency: if self.latency.total() > 0 {
                self.latency.buckets()
            } else {
                Vec::new()
            },
        }
    }
}

/// End-of-stream aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Terminal records seen, reported or not.
    pub total: u64,
    pub reported: u64,
    pub hits: u64,
    pub misses: u64,
    /// Open transactions released because their session started another.
    pub superseded: u64,
    pub p95_ms: u64,
    pub p99_ms: u64,
    pub latency: Vec<Bucket>,
}
