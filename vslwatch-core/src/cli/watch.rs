use crate::config::{ColorChoice, OutputFormat, RawSettings, SlowValue};
use clap::Args;
use std::path::PathBuf;

/// Options for following a log stream.
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// varnishlog output to read; `-` reads standard input
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// HCL settings file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print request headers under each transaction
    #[arg(long)]
    pub show_req_headers: bool,

    /// Print response headers under each transaction
    #[arg(long)]
    pub show_resp_headers: bool,

    /// Print Debug records under each transaction
    #[arg(long)]
    pub show_debug: bool,

    /// Only client addresses matching this regex (`!` negates)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub client_match: Option<String>,

    /// Only requests whose headers match this regex (`!` negates)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub req_headers_match: Option<String>,

    /// Only responses whose headers match this regex (`!` negates)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub resp_headers_match: Option<String>,

    /// Only URLs matching this regex (`!` negates)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub url_match: Option<String>,

    /// Only transactions that matched a cached object
    #[arg(long)]
    pub only_hits: bool,

    /// Only transactions that did not match a cached object
    #[arg(long)]
    pub only_misses: bool,

    /// Only status lines matching this regex, e.g. `5..` (`!` negates)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub only_status: Option<String>,

    /// Only backend responses at least this slow (`--only-slow=250`); bare flag means 1000 ms
    #[arg(
        long,
        value_name = "MS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub only_slow: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// When to color text output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,
}

impl WatchArgs {
    /// Flags given on the command line, as an overlay for file settings.
    /// Switches that were not passed stay unset so the file can turn them on.
    pub fn overrides(&self) -> RawSettings {
        RawSettings {
            show_req_headers: self.show_req_headers.then_some(true),
            show_resp_headers: self.show_resp_headers.then_some(true),
            show_debug: self.show_debug.then_some(true),
            client_match: self.client_match.clone(),
            req_headers_match: self.req_headers_match.clone(),
            resp_headers_match: self.resp_headers_match.clone(),
            url_match: self.url_match.clone(),
            only_hits: self.only_hits.then_some(true),
            only_misses: self.only_misses.then_some(true),
            only_status: self.only_status.clone(),
            only_slow: self.only_slow.clone().map(SlowValue::Text),
            output: self.output,
            color: self.color,
        }
    }
}
