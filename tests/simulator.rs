//! Scenario replay through the simulator

use floatbar::config::ToolbarConfig;
use floatbar::sim::{self, Scenario};
use floatbar::theme::ToolbarTheme;

const CARET_IN_LINK: &str = r#"
name: caret inside a link
document:
  blocks:
    - { type: paragraph, len: 100 }
  links:
    - { start: 20, end: 30, href: "https://example.com", rect: { left: 400, top: 300, width: 80, height: 18 } }
  selection: [50, 50]
platform:
  overlay: { width: 200, height: 40 }
  selection: { is_collapsed: true }
steps:
  - { step: advance, ms: 100 }
  - { step: select, anchor: 25, focus: 25 }
  - { step: advance, ms: 100 }
  - { step: submit_link, href: "https://example.org" }
  - { step: unmount }
"#;

fn replay(yaml: &str) -> Vec<sim::Frame> {
    let scenario = Scenario::from_yaml(yaml).unwrap();
    sim::run(&scenario, ToolbarConfig::default(), ToolbarTheme::default()).unwrap()
}

#[test]
fn test_caret_in_link_scenario() {
    let frames = replay(CARET_IN_LINK);

    // Caret outside the link: nothing to show
    assert_eq!(frames.len(), 2);

    assert_eq!(frames[0].step, 2);
    assert_eq!(frames[0].view_name(), "link");
    assert_eq!(frames[0].state.left(), "340px");
    assert_eq!(frames[0].state.top(), "260px");

    // Submitting leaves the link editor
    assert_eq!(frames[1].step, 3);
    assert_eq!(frames[1].view_name(), "formatting");
}

#[test]
fn test_frame_json() {
    let frames = replay(CARET_IN_LINK);
    let json = frames[0].to_json();
    assert_eq!(json["active"], true);
    assert_eq!(json["href"], "https://example.com");
    assert_eq!(json["view"], "link");
    assert_eq!(json["top"], "260px");
}

#[test]
fn test_frame_text() {
    let frames = replay(CARET_IN_LINK);
    let line = frames[0].to_text();
    assert!(line.contains("active=true"));
    assert!(line.contains("view=link"));
}

#[test]
fn test_load_json_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    std::fs::write(
        &path,
        r#"{
            "document": { "blocks": [{ "type": "paragraph", "len": 40 }], "selection": [5, 15] },
            "platform": {
                "overlay": { "width": 100, "height": 40 },
                "selection": { "is_collapsed": false, "ranges": [{ "left": 50, "top": 100, "width": 60, "height": 20 }] }
            },
            "steps": [{ "step": "advance", "ms": 100 }]
        }"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    let frames = sim::run(&scenario, ToolbarConfig::default(), ToolbarTheme::default()).unwrap();
    assert_eq!(frames.len(), 1);
    // 50 + 30 - 50 = 30, 100 - 40 = 60
    assert_eq!(frames[0].state.left(), "30px");
    assert_eq!(frames[0].state.top(), "60px");
}

#[test]
fn test_missing_scenario_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Scenario::load(&dir.path().join("nope.yaml")).is_err());
}

#[test]
fn test_link_past_document_end_is_rejected() {
    let yaml = r#"
document:
  blocks: [{ type: paragraph, len: 10 }]
  links: [{ start: 5, end: 20, href: "x" }]
steps: []
"#;
    let scenario = Scenario::from_yaml(yaml).unwrap();
    assert!(sim::run(&scenario, ToolbarConfig::default(), ToolbarTheme::default()).is_err());
}
