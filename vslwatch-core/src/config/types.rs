use crate::config::error::ConfigError;
use crate::config::raw::RawSettings;
use crate::filter::{FilterChain, Pattern};
use crate::report::RenderOptions;
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// `Auto` colors only when stdout is a terminal.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => io::stdout().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub show_req_headers: bool,
    pub show_resp_headers: bool,
    pub show_debug: bool,
    pub output: OutputFormat,
    pub color: ColorChoice,
    pub filters: FilterChain,
}

impl Settings {
    /// Compile patterns and thresholds. Done once, before any record is read.
    pub fn resolve(raw: RawSettings) -> Result<Self, ConfigError> {
        let slow = match &raw.only_slow {
            Some(value) => value.threshold()?,
            None => None,
        };

        let filters = FilterChain {
            client: compile("client_match", raw.client_match.as_deref())?,
            request_headers: compile("req_headers_match", raw.req_headers_match.as_deref())?,
            response_headers: compile("resp_headers_match", raw.resp_headers_match.as_deref())?,
            url: compile("url_match", raw.url_match.as_deref())?,
            only_hits: raw.only_hits.unwrap_or(false),
            only_misses: raw.only_misses.unwrap_or(false),
            slow,
            status: compile("only_status", raw.only_status.as_deref())?,
        };

        Ok(Settings {
            show_req_headers: raw.show_req_headers.unwrap_or(false),
            show_resp_headers: raw.show_resp_headers.unwrap_or(false),
            show_debug: raw.show_debug.unwrap_or(false),
            output: raw.output.unwrap_or_default(),
            color: raw.color.unwrap_or_default(),
            filters,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_req_headers: self.show_req_headers,
            show_resp_headers: self.show_resp_headers,
            show_debug: self.show_debug,
            color: self.output == OutputFormat::Text && self.color.enabled(),
        }
    }
}

fn compile(option: &'static str, text: Option<&str>) -> Result<Option<Pattern>, ConfigError> {
    Pattern::parse(text.unwrap_or("")).map_err(|e| ConfigError::pattern(option, e))
}
