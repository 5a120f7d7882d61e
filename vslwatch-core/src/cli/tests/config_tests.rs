use crate::cli::config::{check, dump};
use crate::cli::watch::WatchArgs;
use crate::config::{RawSettings, SlowValue};
use clap::Parser;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    watch: WatchArgs,
}

#[test]
fn check_lists_active_filters() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("vslwatch.hcl");
    fs::write(&path, "url_match = \"!/health\"\nonly_slow = 250\n").unwrap();

    // Act
    let out = check(&path).unwrap();

    // Assert
    assert_eq!(
        out,
        "✔ Config loaded successfully\n\
         ✔ 2 filters active: url_match, only_slow\n\
         ✔ slow threshold 250 ms\n"
    );
}

#[test]
fn check_without_filters() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vslwatch.hcl");
    fs::write(&path, "show_debug = true\n").unwrap();

    let out = check(&path).unwrap();

    assert!(out.ends_with("✔ no filters; every transaction is reported\n"));
}

#[test]
fn check_rejects_bad_regex() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vslwatch.hcl");
    fs::write(&path, "client_match = \"(\"\n").unwrap();

    let err = check(&path).unwrap_err();

    assert!(err.to_string().contains("client_match"));
}

#[test]
fn dump_as_json() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("vslwatch.hcl");
    fs::write(&path, "only_status = \"5..\"\n").unwrap();

    // Act
    let out = dump(&path, true).unwrap();

    // Assert
    assert_eq!(out, "{\n  \"only_status\": \"5..\"\n}\n");
}

#[test]
fn dump_as_hcl_reloads_to_same_settings() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("vslwatch.hcl");
    fs::write(&path, "only_hits = true\nurl_match = \"^/api\"\n").unwrap();

    // Act
    let out = dump(&path, false).unwrap();
    let reloaded: RawSettings = hcl::from_str(&out).unwrap();

    // Assert
    assert_eq!(
        reloaded,
        RawSettings {
            only_hits: Some(true),
            url_match: Some("^/api".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn unset_switches_do_not_override_file_values() {
    let cli = TestCli::try_parse_from(["vslwatch", "--url-match", "!/health"]).unwrap();

    let overrides = cli.watch.overrides();

    assert_eq!(
        overrides,
        RawSettings {
            url_match: Some("!/health".to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn bare_only_slow_means_default_threshold() {
    let cli = TestCli::try_parse_from(["vslwatch", "--only-slow", "access.log"]).unwrap();

    let overrides = cli.watch.overrides();

    assert_eq!(overrides.only_slow, Some(SlowValue::Text("true".to_string())));
    assert_eq!(cli.watch.input.to_str(), Some("access.log"));
}

#[test]
fn only_slow_with_value() {
    let cli = TestCli::try_parse_from(["vslwatch", "--only-slow=250"]).unwrap();

    let overrides = cli.watch.overrides();

    assert_eq!(overrides.only_slow, Some(SlowValue::Text("250".to_string())));
}

#[test]
fn hits_and_misses_can_both_be_given() {
    let cli = TestCli::try_parse_from(["vslwatch", "--only-hits", "--only-misses"]).unwrap();

    let overrides = cli.watch.overrides();

    assert_eq!(overrides.only_hits, Some(true));
    assert_eq!(overrides.only_misses, Some(true));
}

#[test]
fn fractional_only_slow_flag_is_accepted() {
    let cli = TestCli::try_parse_from(["vslwatch", "--only-slow=1.5"]).unwrap();

    let settings = crate::config::Settings::resolve(cli.watch.overrides()).unwrap();

    assert_eq!(settings.filters.slow.map(|t| t.millis()), Some(1.5));
}
