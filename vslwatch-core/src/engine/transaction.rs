use crate::record::{SessionId, Xid};
use serde::Serialize;
use std::fmt::Write as _;

/// Client address placeholder when neither the request nor the session knew it.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// A VCL subroutine, named by its short form in `VCL_call` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Callback {
    Recv,
    Pipe,
    Pass,
    Hash,
    Miss,
    Hit,
    Fetch,
    Deliver,
    Error,
}

impl Callback {
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "recv" => Self::Recv,
            "pipe" => Self::Pipe,
            "pass" => Self::Pass,
            "hash" => Self::Hash,
            "miss" => Self::Miss,
            "hit" => Self::Hit,
            "fetch" => Self::Fetch,
            "deliver" => Self::Deliver,
            "error" => Self::Error,
            _ => return None,
        })
    }

    /// Attribute key the outcome is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Self::Recv => "vcl_recv",
            Self::Pipe => "vcl_pipe",
            Self::Pass => "vcl_pass",
            Self::Hash => "vcl_hash",
            Self::Miss => "vcl_miss",
            Self::Hit => "vcl_hit",
            Self::Fetch => "vcl_fetch",
            Self::Deliver => "vcl_deliver",
            Self::Error => "vcl_error",
        }
    }
}

/// Last return value recorded for each callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CallbackOutcomes {
    #[serde(rename = "vcl_recv", skip_serializing_if = "Option::is_none")]
    pub recv: Option<String>,
    #[serde(rename = "vcl_pipe", skip_serializing_if = "Option::is_none")]
    pub pipe: Option<String>,
    #[serde(rename = "vcl_pass", skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
    #[serde(rename = "vcl_hash", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(rename = "vcl_miss", skip_serializing_if = "Option::is_none")]
    pub miss: Option<String>,
    #[serde(rename = "vcl_hit", skip_serializing_if = "Option::is_none")]
    pub hit: Option<String>,
    #[serde(rename = "vcl_fetch", skip_serializing_if = "Option::is_none")]
    pub fetch: Option<String>,
    #[serde(rename = "vcl_deliver", skip_serializing_if = "Option::is_none")]
    pub deliver: Option<String>,
    #[serde(rename = "vcl_error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CallbackOutcomes {
    fn slot(&mut self, callback: Callback) -> &mut Option<String> {
        match callback {
            Callback::Recv => &mut self.recv,
            Callback::Pipe => &mut self.pipe,
            Callback::Pass => &mut self.pass,
            Callback::Hash => &mut self.hash,
            Callback::Miss => &mut self.miss,
            Callback::Hit => &mut self.hit,
            Callback::Fetch => &mut self.fetch,
            Callback::Deliver => &mut self.deliver,
            Callback::Error => &mut self.error,
        }
    }

    pub fn set(&mut self, callback: Callback, value: &str) {
        *self.slot(callback) = Some(value.to_string());
    }

    /// Recorded outcome, `""` when the callback never returned.
    pub fn get(&self, callback: Callback) -> &str {
        let value = match callback {
            Callback::Recv => &self.recv,
            Callback::Pipe => &self.pipe,
            Callback::Pass => &self.pass,
            Callback::Hash => &self.hash,
            Callback::Miss => &self.miss,
            Callback::Hit => &self.hit,
            Callback::Fetch => &self.fetch,
            Callback::Deliver => &self.deliver,
            Callback::Error => &self.error,
        };
        value.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSide {
    Request,
    Response,
}

impl HeaderSide {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Request => "> ",
            Self::Response => "< ",
        }
    }
}

/// Everything accumulated for one open transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub xid: Xid,
    pub session: SessionId,
    pub client: String,
    pub method: Option<String>,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub status_code: Option<u16>,
    pub status_reason: Option<String>,
    pub response_protocol: Option<String>,
    pub callbacks: CallbackOutcomes,
    /// Object the request was matched against, set by a `Hit` record.
    pub hit_object: Option<Xid>,
    pub debug: String,
    pub request_headers: String,
    pub response_headers: String,
}

impl Transaction {
    pub fn new(xid: Xid, session: SessionId, client: impl Into<String>) -> Self {
        Self {
            xid,
            session,
            client: client.into(),
            method: None,
            url: None,
            protocol: None,
            status_code: None,
            status_reason: None,
            response_protocol: None,
            callbacks: CallbackOutcomes::default(),
            hit_object: None,
            debug: String::new(),
            request_headers: String::new(),
            response_headers: String::new(),
        }
    }

    /// `"404 Not Found"`, or whichever half is known.
    pub fn status_line(&self) -> Option<String> {
        match (self.status_code, self.status_reason.as_deref()) {
            (Some(code), Some(reason)) if !reason.is_empty() => Some(format!("{code} {reason}")),
            (Some(code), _) => Some(code.to_string()),
            (None, Some(reason)) if !reason.is_empty() => Some(reason.to_string()),
            (None, _) => None,
        }
    }

    pub fn is_hit_flagged(&self) -> bool {
        self.hit_object.is_some_and(|xid| xid.0 != 0)
    }

    pub fn append_header(&mut self, side: HeaderSide, name: &str, value: &str) {
        let buffer = match side {
            HeaderSide::Request => &mut self.request_headers,
            HeaderSide::Response => &mut self.response_headers,
        };
        let name = name.strip_suffix(':').unwrap_or(name);
        let _ = writeln!(buffer, "{}{name} = {value}", side.prefix());
    }

    pub fn append_debug(&mut self, text: &str) {
        if !self.debug.is_empty() {
            self.debug.push('\n');
        }
        self.debug.push_str(text);
    }
}
