use crate::cli::stream;
use crate::config::{ColorChoice, OutputFormat, RawSettings, Settings};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::io::Cursor;

const LOG: &[u8] = b"\
   5 SessionOpen  c 10.1.1.1 40000 :80
   5 ReqStart     c 10.1.1.1 40000 300
   5 RxRequest    c GET
   5 RxURL        c /health
   5 RxProtocol   c HTTP/1.1
   5 VCL_call     c recv
   5 VCL_return   c pass
   5 VCL_call     c pass
   5 VCL_return   c pass
   5 VCL_call     c fetch
   5 VCL_return   c deliver
   5 TxStatus     c 200
   5 TxResponse   c OK
   5 ReqEnd       c 300 100.000 100.010 0.0001 0.0090 0.0005
   5 ReqStart     c 10.1.1.1 40000 301
   5 RxRequest    c GET
   5 RxURL        c /api/x
   5 RxProtocol   c HTTP/1.1
   5 RxHeader     c Accept: \xff\xfe binary
   5 TxStatus     c 502
   5 TxResponse   c Bad Gateway
   5 ReqEnd       c 301 100.100 100.400 0.0001 0.2900 0.0005
   5 SessionClose c EOF
garbage line here
";

fn settings(raw: RawSettings) -> Settings {
    Settings::resolve(RawSettings {
        color: Some(ColorChoice::Never),
        ..raw
    })
    .unwrap()
}

fn run(raw: RawSettings) -> (String, crate::report::Summary) {
    let mut out = Vec::new();
    let summary = stream(Cursor::new(LOG), &settings(raw), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn reports_every_transaction_without_filters() {
    // Act
    let (out, summary) = run(RawSettings::default());

    // Assert
    assert!(out.contains("/health"));
    assert!(out.contains("/api/x"));
    assert!(out.contains("MISS 502 Bad Gateway 300.000 ms"));
    assert!(out.contains("\nTotal requests: 2\n"));
    assert_eq!(summary.total, 2);
    assert_eq!(summary.reported, 2);
    assert_eq!(summary.misses, 2);
}

#[test]
fn negated_url_and_status_filters() {
    // Act
    let (out, summary) = run(RawSettings {
        url_match: Some("!/health".to_string()),
        only_status: Some("5..".to_string()),
        ..Default::default()
    });

    // Assert
    assert!(!out.contains("/health"));
    assert!(out.contains("/api/x"));
    assert_eq!(summary.total, 2);
    assert_eq!(summary.reported, 1);
}

#[test]
fn invalid_utf8_headers_are_tolerated() {
    let (out, _) = run(RawSettings {
        show_req_headers: Some(true),
        ..Default::default()
    });

    assert!(out.contains("> Accept = \u{fffd}\u{fffd} binary\n"));
}

#[test]
fn json_output_is_one_object_per_line() {
    // Act
    let (out, _) = run(RawSettings {
        output: Some(OutputFormat::Json),
        only_slow: Some(crate::config::SlowValue::Millis(100)),
        ..Default::default()
    });

    // Assert
    let lines: Vec<Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["xid"], 301);
    assert_eq!(lines[0]["status"], "502 Bad Gateway");
    assert_eq!(lines[1]["total"], 2);
    assert_eq!(lines[1]["reported"], 1);
}

#[test]
fn empty_input_still_prints_summary() {
    let mut out = Vec::new();

    let summary = stream(Cursor::new(b""), &settings(RawSettings::default()), &mut out).unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nTotal requests: 0\nReported: 0 | hits: 0 | misses: 0\n"
    );
}
