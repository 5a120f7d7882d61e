use thiserror::Error;

/// Threshold used when slow-only is switched on without a value.
pub const DEFAULT_SLOW_MS: f64 = 1000.0;

#[derive(Debug, Error, PartialEq)]
#[error("invalid slow threshold '{0}': expected on/off or a number of milliseconds")]
pub struct InvalidThreshold(pub String);

/// Minimum backend response time for the slow-only filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlowThreshold {
    millis: f64,
}

impl SlowThreshold {
    pub fn from_millis(millis: f64) -> Self {
        Self { millis }
    }

    /// Interpret an option value.
    ///
    /// Off: empty, `false`, `no`, `off` or zero. On at [`DEFAULT_SLOW_MS`]:
    /// `true`, `yes`, `on` or exactly one. Any other non-negative number,
    /// fractions included, is a threshold in ms.
    pub fn parse(value: &str) -> Result<Option<Self>, InvalidThreshold> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "" | "false" | "no" | "off" => return Ok(None),
            "true" | "yes" | "on" => return Ok(Some(Self::from_millis(DEFAULT_SLOW_MS))),
            _ => {}
        }

        let millis = value
            .parse::<f64>()
            .ok()
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .ok_or_else(|| InvalidThreshold(value.to_string()))?;

        Ok(if millis == 0.0 {
            None
        } else if millis == 1.0 {
            Some(Self::from_millis(DEFAULT_SLOW_MS))
        } else {
            Some(Self::from_millis(millis))
        })
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }

    pub fn is_slow(&self, backend_ms: f64) -> bool {
        backend_ms >= self.millis
    }
}
