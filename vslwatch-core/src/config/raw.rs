use crate::config::types::{ColorChoice, OutputFormat};
use crate::filter::{InvalidThreshold, SlowThreshold};
use serde::{Deserialize, Serialize};

/// Option values as written in a settings file or on the command line.
/// Every field is optional; `None` means "not given here".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_req_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_resp_headers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_debug: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_headers_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resp_headers_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_hits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_misses: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_slow: Option<SlowValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorChoice>,
}

/// `only_slow` may be written as `true`, `250`, `2.5` or `"250"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SlowValue {
    Flag(bool),
    Millis(u64),
    Fractional(f64),
    Text(String),
}

impl SlowValue {
    pub fn threshold(&self) -> Result<Option<SlowThreshold>, InvalidThreshold> {
        match self {
            SlowValue::Flag(on) => SlowThreshold::parse(if *on { "true" } else { "false" }),
            SlowValue::Millis(ms) => SlowThreshold::parse(&ms.to_string()),
            SlowValue::Fractional(ms) => SlowThreshold::parse(&ms.to_string()),
            SlowValue::Text(text) => SlowThreshold::parse(text),
        }
    }
}

impl RawSettings {
    /// Values set in `other` win over values set in `self`.
    pub fn overlay(self, other: RawSettings) -> RawSettings {
        RawSettings {
            show_req_headers: other.show_req_headers.or(self.show_req_headers),
            show_resp_headers: other.show_resp_headers.or(self.show_resp_headers),
            show_debug: other.show_debug.or(self.show_debug),
            client_match: other.client_match.or(self.client_match),
            req_headers_match: other.req_headers_match.or(self.req_headers_match),
            resp_headers_match: other.resp_headers_match.or(self.resp_headers_match),
            url_match: other.url_match.or(self.url_match),
            only_hits: other.only_hits.or(self.only_hits),
            only_misses: other.only_misses.or(self.only_misses),
            only_status: other.only_status.or(self.only_status),
            only_slow: other.only_slow.or(self.only_slow),
            output: other.output.or(self.output),
            color: other.color.or(self.color),
        }
    }
}
