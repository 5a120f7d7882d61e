use crate::engine::{CallbackOutcomes, Transaction, Verdict, classify};
use crate::record::{ReqEnd, Xid};
use serde::Serialize;

/// A finished transaction, ready for filtering and rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionReport {
    pub xid: Xid,
    pub client: String,
    pub method: Option<String>,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub status: Option<String>,
    pub status_code: Option<u16>,
    pub response_protocol: Option<String>,
    pub verdict: Verdict,
    pub hit_object: Option<Xid>,
    pub round_trip_ms: f64,
    pub backend_ms: f64,
    pub delivery_ms: Option<f64>,
    pub callbacks: CallbackOutcomes,
    #[serde(skip)]
    pub hit_flagged: bool,
    #[serde(skip)]
    pub request_headers: String,
    #[serde(skip)]
    pub response_headers: String,
    #[serde(skip)]
    pub debug: String,
}

impl TransactionReport {
    pub fn new(tx: Transaction, end: &ReqEnd) -> Self {
        let verdict = classify(&tx.callbacks);
        let status = tx.status_line();
        let hit_flagged = tx.is_hit_flagged();

        Self {
            xid: tx.xid,
            client: tx.client,
            method: tx.method,
            url: tx.url,
            protocol: tx.protocol,
            status,
            status_code: tx.status_code,
            response_protocol: tx.response_protocol,
            verdict,
            hit_object: tx.hit_object,
            round_trip_ms: end.round_trip_ms(),
            backend_ms: end.backend_ms(),
            delivery_ms: end.delivery_ms(),
            callbacks: tx.callbacks,
            hit_flagged,
            request_headers: tx.request_headers,
            response_headers: tx.response_headers,
            debug: tx.debug,
        }
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}
