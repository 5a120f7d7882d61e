use serde::Serialize;

pub const LATENCY_BUCKETS_MS: &[u64] = &[1, 5, 10, 25, 50, 100, 250, 500, 1000];

/// Fixed-bucket latency histogram with an overflow bucket.
#[derive(Debug, Clone)]
pub struct LatencyHistogram {
    bounds: &'static [u64],
    counts: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: u64,
}

impl LatencyHistogram {
    pub(crate) fn new(bounds: &'static [u64]) -> Self {
        Self {
            bounds,
            counts: vec![0; bounds.len() + 1],
        }
    }

    pub(crate) fn record(&mut self, millis: f64) {
        let idx = self
            .bounds
            .iter()
            .position(|upper| millis <= *upper as f64)
            .unwrap_or(self.bounds.len());
        self.counts[idx] += 1;
    }

    pub(crate) fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub(crate) fn buckets(&self) -> Vec<Bucket> {
        let mut lower: u64 = 0;
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let label = match self.bounds.get(i) {
                    Some(upper) => {
                        let label = format!("{lower}–{upper}ms");
                        lower = upper + 1;
                        label
                    }
                    None => format!(">{}ms", lower.saturating_sub(1)),
                };
                Bucket {
                    label,
                    count: *count,
                }
            })
            .collect()
    }

    /// Upper bound of the bucket holding the `pct` quantile. Samples in the
    /// overflow bucket report one past the last bound.
    pub(crate) fn percentile(&self, pct: f64) -> u64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }

        let target = (total as f64 * pct).ceil() as u64;
        let mut running = 0;

        for (i, count) in self.counts.iter().enumerate() {
            running += count;
            if running >= target {
                return match self.bounds.get(i) {
                    Some(upper) => *upper,
                    None => self.bounds.last().map_or(0, |b| b.saturating_add(1)),
                };
            }
        }

        0
    }
}
