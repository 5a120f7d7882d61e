use serde::Serialize;
use std::fmt;

/// Worker/session identifier from the first column of a log line.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SessionId(pub u64);

/// Transaction id, as carried by `ReqStart`, `ReqEnd` and `Hit`.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Xid(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Xid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `c`: observed on the client side.
    Client,
    /// `b`: observed on the backend side.
    Backend,
    /// `-`: not tied to either side.
    Neither,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub session: SessionId,
    pub direction: Direction,
    pub kind: RecordKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordKind {
    SessionOpen { client: String },
    SessionClose,
    ReqStart { client: String, xid: Xid },
    RxRequest { method: String },
    RxUrl { url: String },
    RxProtocol { version: String },
    RxHeader { name: String, value: String },
    Hit { object: Xid },
    TxStatus { code: u16 },
    TxResponse { reason: String },
    TxProtocol { version: String },
    TxHeader { name: String, value: String },
    VclCall { callback: String },
    VclReturn { value: String },
    Debug { text: String },
    ReqEnd(ReqEnd),
}

/// Timings carried by the terminal `ReqEnd` record. All values are seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReqEnd {
    pub xid: Xid,
    pub start: f64,
    pub end: f64,
    pub session_elapsed: f64,
    pub backend: f64,
    pub delivery: Option<f64>,
}

impl ReqEnd {
    pub fn round_trip_ms(&self) -> f64 {
        ((self.end - self.start) * 1000.0).max(0.0)
    }

    pub fn backend_ms(&self) -> f64 {
        self.backend * 1000.0
    }

    pub fn delivery_ms(&self) -> Option<f64> {
        self.delivery.map(|d| d * 1000.0)
    }
}
