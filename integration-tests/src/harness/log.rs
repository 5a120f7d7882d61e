use std::fmt::Write as _;
use std::io::Cursor;
use vslwatch_core::cli::stream;
use vslwatch_core::config::{ColorChoice, RawSettings, Settings};
use vslwatch_core::report::Summary;

/// Start time written into every `ReqEnd`.
const EPOCH: f64 = 1_700_000_000.0;

/// Builds `varnishlog` text the way varnishd 2.x prints it.
#[derive(Debug, Default)]
pub struct LogBuilder {
    out: String,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, session: u64, tag: &str, direction: &str, payload: &str) -> Self {
        let _ = writeln!(self.out, "{session:>5} {tag:<12} {direction} {payload}");
        self
    }

    fn client(self, session: u64, tag: &str, payload: &str) -> Self {
        self.line(session, tag, "c", payload)
    }

    pub fn open(self, session: u64, client: &str) -> Self {
        self.client(session, "SessionOpen", &format!("{client} 40000 :80"))
    }

    pub fn close(self, session: u64) -> Self {
        self.client(session, "SessionClose", "EOF")
    }

    /// `ReqStart` followed by the request line records.
    pub fn request(self, session: u64, client: &str, xid: u64, method: &str, url: &str) -> Self {
        self.client(session, "ReqStart", &format!("{client} 40000 {xid}"))
            .client(session, "RxRequest", method)
            .client(session, "RxURL", url)
            .client(session, "RxProtocol", "HTTP/1.1")
    }

    pub fn req_header(self, session: u64, header: &str) -> Self {
        self.client(session, "RxHeader", header)
    }

    pub fn resp_header(self, session: u64, header: &str) -> Self {
        self.client(session, "TxHeader", header)
    }

    pub fn vcl(self, session: u64, callback: &str, value: &str) -> Self {
        self.client(session, "VCL_call", callback)
            .client(session, "VCL_return", value)
    }

    pub fn hit(self, session: u64, object: u64) -> Self {
        self.client(session, "Hit", &object.to_string())
    }

    /// The VCL path of a cache hit.
    pub fn cache_hit(self, session: u64, object: u64) -> Self {
        self.vcl(session, "recv", "lookup")
            .vcl(session, "hash", "hash")
            .hit(session, object)
            .vcl(session, "hit", "deliver")
            .vcl(session, "deliver", "deliver")
    }

    /// The VCL path of a lookup that went to the backend.
    pub fn cache_miss(self, session: u64) -> Self {
        self.vcl(session, "recv", "lookup")
            .vcl(session, "hash", "hash")
            .vcl(session, "miss", "fetch")
            .vcl(session, "fetch", "deliver")
            .vcl(session, "deliver", "deliver")
    }

    pub fn status(self, session: u64, code: u16, reason: &str) -> Self {
        self.client(session, "TxProtocol", "HTTP/1.1")
            .client(session, "TxStatus", &code.to_string())
            .client(session, "TxResponse", reason)
    }

    /// `ReqEnd` with the round trip and backend time given in seconds.
    pub fn end(self, session: u64, xid: u64, round_trip: f64, backend: f64) -> Self {
        let end = EPOCH + round_trip;
        self.client(
            session,
            "ReqEnd",
            &format!("{xid} {EPOCH:.9} {end:.9} 0.000100000 {backend:.9} 0.000020000"),
        )
    }

    pub fn build(self) -> String {
        self.out
    }
}

/// Stream `log` through a fresh engine with uncolored text output.
pub fn run_log(log: &str, raw: RawSettings) -> (String, Summary) {
    let settings = Settings::resolve(RawSettings {
        color: Some(ColorChoice::Never),
        ..raw
    })
    .unwrap();

    let mut out = Vec::new();
    let summary = stream(Cursor::new(log.as_bytes()), &settings, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}
