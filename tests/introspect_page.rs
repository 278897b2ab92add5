use assert_fs::prelude::*;
use chrono::{FixedOffset, TimeZone, Utc};

use sandesh_webs::table::STRUCT_OR_LIST_TABLE;
use sandesh_webs::{
    format_date_time, AppConfig, ConfigManager, DateTimeParts, DisplayZone, IntrospectPage,
    MalformedPolicy, Panel, PanelState, SandeshRequest, TraceElement, TraceEntry,
};

#[test]
fn configured_page_renders_traces_in_fixed_zone() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("webs.toml");
    file.write_str(
        r#"
        [trace]
        timezone = "-05:00"
        malformed = "placeholder"
        placeholder = "invalid-ts"
        "#,
    )
    .unwrap();

    let manager = ConfigManager::load_from_file(file.path()).unwrap();

    let mut page = IntrospectPage::new();
    page.table_ids = vec![STRUCT_OR_LIST_TABLE.to_string()];
    page.panels = vec![Panel::new("ifmap", PanelState::Shown)];
    page.traces = vec![
        TraceEntry::new("1609459200000000 XMPP peer up"),
        TraceEntry::new("garbage route add"),
    ];

    let report = page.on_ready(manager.get_config()).unwrap();
    page.collapse_all();

    let dt = Utc
        .timestamp_millis_opt(1_609_459_200_000)
        .unwrap()
        .with_timezone(&FixedOffset::west_opt(5 * 3600).unwrap());
    let expected = format_date_time(&DateTimeParts::from(&dt));
    assert_eq!(expected, "2020-12-31 19:00:00.000");

    assert_eq!(page.traces[0].content(), format!("{} XMPP peer up", expected));
    assert_eq!(page.traces[1].content(), "invalid-ts route add");
    assert_eq!(report.traces.transformed, 1);
    assert_eq!(report.traces.skipped[0].index, 1);
    assert!(report.table.is_some());
    assert_eq!(page.panels[0].state, PanelState::Hidden);
}

#[test]
fn config_manager_saves_edits_back() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("webs.toml");
    AppConfig::default().save_to_file(file.path()).unwrap();

    let mut manager = ConfigManager::load_from_file(file.path()).unwrap();
    manager.get_config_mut().trace.timezone = DisplayZone::Utc;
    manager.get_config_mut().trace.malformed = MalformedPolicy::Placeholder;
    manager.save().unwrap();

    let reloaded = AppConfig::load_from_file(file.path()).unwrap();
    assert_eq!(reloaded.trace.timezone, DisplayZone::Utc);
    assert_eq!(reloaded.trace.malformed, MalformedPolicy::Placeholder);
}

#[test]
fn next_batch_link_points_at_the_configured_server() {
    let config = AppConfig::default();
    let req = SandeshRequest::next_batch(Some("SandeshTraceRequest"), Some("XmppMessageTrace 100")).unwrap();
    assert_eq!(
        req.with_base(&config.request),
        "http://localhost:8085/Snh_SandeshTraceRequest?x=XmppMessageTrace%20100"
    );
}
