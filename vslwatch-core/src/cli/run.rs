use crate::cli::watch::WatchArgs;
use crate::config::{OutputFormat, Settings, load_settings};
use crate::engine::Engine;
use crate::record::parse_record;
use crate::report::{
    RenderOptions, Summary, TransactionReport, render_summary, render_summary_json,
    render_transaction, render_transaction_json,
};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub fn run_watch(args: WatchArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref(), args.overrides())
        .context("invalid settings")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.input == Path::new("-") {
        let stdin = io::stdin();
        stream(stdin.lock(), &settings, &mut out)?;
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("failed to open {}", args.input.display()))?;
        stream(BufReader::new(file), &settings, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

/// Feed every line of `reader` through the engine, writing reports as
/// transactions end and the aggregate summary once the input is exhausted.
pub fn stream<R: BufRead, W: Write>(
    mut reader: R,
    settings: &Settings,
    out: &mut W,
) -> Result<Summary> {
    let mut engine = Engine::new(settings.filters.clone());
    let opts = settings.render_options();
    let mut buf = Vec::new();
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        if reader
            .read_until(b'\n', &mut buf)
            .context("failed to read log stream")?
            == 0
        {
            break;
        }
        line_no += 1;

        // Header values are not guaranteed to be UTF-8.
        let line = String::from_utf8_lossy(&buf);

        let record = match parse_record(line.trim_end()) {
            Ok(Some(record)) => record,
            Ok(None) => continue,
            Err(err) => {
                tracing::debug!(line = line_no, error = %err, "skipping malformed record");
                continue;
            }
        };

        if let Some(report) = engine.process(&record) {
            write_report(out, &report, settings.output, &opts)?;
        }
    }

    let summary = engine.finish();
    write_summary(out, &summary, settings)?;
    Ok(summary)
}

fn write_report<W: Write>(
    out: &mut W,
    report: &TransactionReport,
    format: OutputFormat,
    opts: &RenderOptions,
) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render_transaction(report, opts).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_transaction_json(report, opts)?)?,
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, summary: &Summary, settings: &Settings) -> Result<()> {
    match settings.output {
        OutputFormat::Text => {
            writeln!(out)?;
            out.write_all(render_summary(summary).as_bytes())?;
        }
        OutputFormat::Json => writeln!(out, "{}", render_summary_json(summary)?)?,
    }
    Ok(())
}
