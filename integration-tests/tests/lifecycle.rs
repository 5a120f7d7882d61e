use integration_tests::harness::{LogBuilder, capture_events, run_log};
use pretty_assertions::assert_eq;
use tracing::Level;
use vslwatch_core::config::RawSettings;

#[test]
fn superseded_transaction_is_discarded_with_a_warning() {
    // Arrange
    let log = LogBuilder::new()
        .open(5, "10.1.1.1")
        .request(5, "10.1.1.1", 100, "GET", "/lost")
        .request(5, "10.1.1.1", 101, "GET", "/kept")
        .status(5, 200, "OK")
        .end(5, 101, 0.01, 0.005)
        .end(5, 100, 0.01, 0.005)
        .close(5)
        .build();

    // Act
    let ((out, summary), events) = capture_events(|| run_log(&log, RawSettings::default()));

    // Assert
    assert!(out.contains("/kept"));
    assert!(!out.contains("/lost"));
    assert_eq!(summary.total, 2);
    assert_eq!(summary.reported, 1);
    assert_eq!(summary.superseded, 1);

    let warning = events
        .iter()
        .find(|e| e.level == Level::WARN)
        .expect("supersede warning");
    assert_eq!(warning.field("superseded"), Some("100"));
    assert_eq!(warning.field("xid"), Some("101"));
}

#[test]
fn piped_request_is_reported_after_the_session_closes() {
    // Arrange
    let log = LogBuilder::new()
        .open(12, "10.1.1.2")
        .request(12, "10.1.1.2", 555, "GET", "/stream")
        .vcl(12, "recv", "pipe")
        .vcl(12, "pipe", "pipe")
        .close(12)
        .end(12, 555, 2.5, 0.0)
        .build();

    // Act
    let ((out, summary), events) = capture_events(|| run_log(&log, RawSettings::default()));

    // Assert
    assert!(out.contains("       555 10.1.1.2        GET /stream HTTP/1.1\n"));
    assert!(!out.contains("Discarded"));
    assert_eq!(summary.total, 1);
    assert_eq!(summary.reported, 1);
    assert_eq!(summary.misses, 1);
    assert!(events.iter().all(|e| e.level != Level::WARN));
}

#[test]
fn interleaved_sessions_keep_their_own_state() {
    // Arrange
    let log = LogBuilder::new()
        .open(1, "10.0.0.1")
        .open(2, "10.0.0.2")
        .request(1, "10.0.0.1", 11, "GET", "/one")
        .request(2, "10.0.0.2", 22, "POST", "/two")
        .vcl(1, "recv", "lookup")
        .vcl(2, "recv", "pass")
        .req_header(2, "Content-Type: text/plain")
        .req_header(1, "Accept: */*")
        .status(2, 201, "Created")
        .status(1, 404, "Not Found")
        .end(2, 22, 0.03, 0.02)
        .end(1, 11, 0.01, 0.0)
        .build();

    // Act
    let (out, summary) = run_log(
        &log,
        RawSettings {
            show_req_headers: Some(true),
            ..Default::default()
        },
    );

    // Assert
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "        22 10.0.0.2        POST /two HTTP/1.1");
    assert!(lines[1].contains("201 Created"));
    assert_eq!(lines[2], "> Content-Type = text/plain");
    assert_eq!(lines[3], "        11 10.0.0.1        GET /one HTTP/1.1");
    assert!(lines[4].contains("404 Not Found"));
    assert_eq!(lines[5], "> Accept = */*");
    assert_eq!(summary.reported, 2);
}

#[test]
fn backend_records_do_not_touch_client_transactions() {
    let log = LogBuilder::new()
        .open(9, "10.0.0.9")
        .request(9, "10.0.0.9", 90, "GET", "/client")
        .line(9, "RxURL", "b", "/backend")
        .line(9, "TxStatus", "b", "500")
        .status(9, 200, "OK")
        .end(9, 90, 0.01, 0.0)
        .build();

    let (out, _) = run_log(&log, RawSettings::default());

    assert!(out.contains("GET /client HTTP/1.1"));
    assert!(out.contains("200 OK"));
    assert!(!out.contains("/backend"));
}

#[test]
fn end_of_unknown_transaction_still_counts() {
    let log = LogBuilder::new()
        .open(3, "10.0.0.3")
        .end(3, 77, 0.01, 0.0)
        .build();

    let (out, summary) = run_log(&log, RawSettings::default());

    assert_eq!(summary.total, 1);
    assert_eq!(summary.reported, 0);
    assert!(out.starts_with("\nTotal requests: 1\n"));
}
