use crate::filter::pattern::Pattern;
use crate::filter::slow::SlowThreshold;
use crate::report::TransactionReport;
use std::fmt;

/// Which filter turned a transaction away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Client,
    RequestHeaders,
    ResponseHeaders,
    Url,
    OnlyHits,
    OnlyMisses,
    Slow,
    Status,
}

impl FilterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Client => "client_match",
            FilterKind::RequestHeaders => "req_headers_match",
            FilterKind::ResponseHeaders => "resp_headers_match",
            FilterKind::Url => "url_match",
            FilterKind::OnlyHits => "only_hits",
            FilterKind::OnlyMisses => "only_misses",
            FilterKind::Slow => "only_slow",
            FilterKind::Status => "only_status",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configured filters. An unset filter lets everything through.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    pub client: Option<Pattern>,
    pub request_headers: Option<Pattern>,
    pub response_headers: Option<Pattern>,
    pub url: Option<Pattern>,
    /// Keep only transactions carrying a `Hit` record.
    pub only_hits: bool,
    /// Keep only transactions without one. Both switches together keep nothing.
    pub only_misses: bool,
    pub slow: Option<SlowThreshold>,
    pub status: Option<Pattern>,
}

impl FilterChain {
    pub fn passes(&self, report: &TransactionReport) -> bool {
        self.first_rejection(report).is_none()
    }

    /// The first filter, in evaluation order, that `report` fails.
    pub fn first_rejection(&self, report: &TransactionReport) -> Option<FilterKind> {
        let patterns = [
            (&self.client, FilterKind::Client, report.client.as_str()),
            (
                &self.request_headers,
                FilterKind::RequestHeaders,
                report.request_headers.as_str(),
            ),
            (
                &self.response_headers,
                FilterKind::ResponseHeaders,
                report.response_headers.as_str(),
            ),
            (&self.url, FilterKind::Url, report.url()),
        ];

        for (pattern, kind, haystack) in patterns {
            if pattern.as_ref().is_some_and(|p| !p.passes(haystack)) {
                return Some(kind);
            }
        }

        if self.only_hits && !report.hit_flagged {
            return Some(FilterKind::OnlyHits);
        }
        if self.only_misses && report.hit_flagged {
            return Some(FilterKind::OnlyMisses);
        }

        if self.slow.is_some_and(|t| !t.is_slow(report.backend_ms)) {
            return Some(FilterKind::Slow);
        }

        if self.status.as_ref().is_some_and(|p| !p.passes(report.status())) {
            return Some(FilterKind::Status);
        }

        None
    }

    /// Names of the filters that are switched on.
    pub fn active(&self) -> Vec<FilterKind> {
        let mut active = Vec::new();
        if self.client.is_some() {
            active.push(FilterKind::Client);
        }
        if self.request_headers.is_some() {
            active.push(FilterKind::RequestHeaders);
        }
        if self.response_headers.is_some() {
            active.push(FilterKind::ResponseHeaders);
        }
        if self.url.is_some() {
            active.push(FilterKind::Url);
        }
        if self.only_hits {
            active.push(FilterKind::OnlyHits);
        }
        if self.only_misses {
            active.push(FilterKind::OnlyMisses);
        }
        if self.slow.is_some() {
            active.push(FilterKind::Slow);
        }
        if self.status.is_some() {
            active.push(FilterKind::Status);
        }
        active
    }
}
