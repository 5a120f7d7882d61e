use crate::engine::Verdict;
use crate::report::stats::Summary;
use crate::report::types::TransactionReport;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

/// What to print besides the two summary lines, and whether to style it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_req_headers: bool,
    pub show_resp_headers: bool,
    pub show_debug: bool,
    pub color: bool,
}

pub fn render_transaction(report: &TransactionReport, opts: &RenderOptions) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>10} {:<15} {} {} {}",
        report.xid,
        report.client,
        report.method.as_deref().unwrap_or("-"),
        report.url.as_deref().unwrap_or("-"),
        report.protocol.as_deref().unwrap_or("-"),
    );

    let verdict = paint_verdict(report.verdict, opts.color);
    let _ = writeln!(
        out,
        "{:>10} {} {} {} (backend {:.3} ms)",
        "",
        verdict,
        report.status.as_deref().unwrap_or("-"),
        paint_latency(report.round_trip_ms, opts.color),
        report.backend_ms,
    );

    if opts.show_req_headers && !report.request_headers.is_empty() {
        out.push_str(&report.request_headers);
    }
    if opts.show_resp_headers && !report.response_headers.is_empty() {
        out.push_str(&report.response_headers);
    }
    if opts.show_debug && !report.debug.is_empty() {
        for line in report.debug.lines() {
            let _ = writeln!(out, "# {line}");
        }
    }

    out
}

fn paint_verdict(verdict: Verdict, color: bool) -> String {
    let label = format!("{:<4}", verdict.as_str());
    if !color {
        return label;
    }
    match verdict {
        Verdict::Hit => label.green().to_string(),
        Verdict::Miss => label.yellow().to_string(),
    }
}

fn paint_latency(millis: f64, color: bool) -> String {
    let text = format!("{millis:.3} ms");
    if !color {
        return text;
    }
    if millis >= 1000.0 {
        text.red().to_string()
    } else if millis >= 100.0 {
        text.yellow().to_string()
    } else {
        text.green().to_string()
    }
}

#[derive(Serialize)]
struct JsonTransaction<'a> {
    #[serde(flatten)]
    report: &'a TransactionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_headers: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_headers: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<&'a str>,
}

/// One JSON object per line. Header and debug text are included only when
/// switched on.
pub fn render_transaction_json(
    report: &TransactionReport,
    opts: &RenderOptions,
) -> serde_json::Result<String> {
    let json = JsonTransaction {
        report,
        request_headers: opts
            .show_req_headers
            .then_some(report.request_headers.as_str()),
        response_headers: opts
            .show_resp_headers
            .then_some(report.response_headers.as_str()),
        debug: opts.show_debug.then_some(report.debug.as_str()),
    };
    serde_json::to_string(&json)
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Total requests: {}", summary.total);
    let _ = writeln!(
        out,
        "Reported: {} | hits: {} | misses: {}",
        summary.reported, summary.hits, summary.misses
    );

    if summary.superseded > 0 {
        let _ = writeln!(out, "Discarded: {} superseded", summary.superseded);
    }

    let samples: u64 = summary.latency.iter().map(|b| b.count).sum();
    if samples > 0 {
        out.push_str("Latency:\n");
        for bucket in &summary.latency {
            let pct = (bucket.count as f64 / samples as f64) * 100.0;
            let bars = (pct / 5.0).round() as usize;
            let _ = writeln!(
                out,
                "  {:<12} {:<20} {:>5.1}%",
                bucket.label,
                "█".repeat(bars),
                pct
            );
        }
        let _ = writeln!(
            out,
            "Latency p95 ≈ {}ms | p99 ≈ {}ms",
            summary.p95_ms, summary.p99_ms
        );
    }

    out
}

pub fn render_summary_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string(summary)
}
