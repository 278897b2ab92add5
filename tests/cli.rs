use assert_fs::prelude::*;
use assert_matches::assert_matches;
use std::io;

use sandesh_webs::cli::{run, CliError};
use sandesh_webs::{AppConfig, DisplayZone, MalformedPolicy};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn trace_file_with_mixed_lines_uses_placeholder_policy() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("trace.log");
    file.write_str("1609459200000000 BGP peer up\nnot-a-ts keepalive\n\n1609459201000000 done\n")
        .unwrap();

    let mut config = AppConfig::default();
    config.trace.timezone = DisplayZone::Utc;
    config.trace.malformed = MalformedPolicy::Placeholder;
    config.trace.placeholder = "??".to_string();

    let path = file.path().to_string_lossy().into_owned();
    let mut out = Vec::new();
    run(&args(&["trace", &path]), &config, io::empty(), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "2021-01-01 00:00:00.000 BGP peer up\n?? keepalive\n??\n2021-01-01 00:00:01.000 done\n"
    );
}

#[test]
fn missing_trace_file_is_io_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let path = dir.path().join("absent.log").to_string_lossy().into_owned();
    let mut out = Vec::new();
    assert_matches!(
        run(&args(&["trace", &path]), &AppConfig::default(), io::empty(), &mut out),
        Err(CliError::Io(_))
    );
}

#[test]
fn table_options_prints_widget_json() {
    let mut out = Vec::new();
    run(&args(&["table-options"]), &AppConfig::default(), io::empty(), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["sPaginationType"], "bootstrap");
    assert_eq!(value["oLanguage"]["sLengthMenu"], "_MENU_ Records per Page");
}

#[test]
fn link_without_value_is_usage_error() {
    let mut out = Vec::new();
    let err = run(&args(&["link", "ItfReq"]), &AppConfig::default(), io::empty(), &mut out).unwrap_err();
    assert_matches!(err, CliError::Usage);
    assert!(err.to_string().contains("sandesh-webs link <NAME> <VALUE>"));
}
