use portfolio_core::{parse_frontmatter, ArrayParse, MetaValue};
use serde_json::json;

const DRONE_RECORD: &str = r#"---
id: drone-swarm
title: "Drone Swarm Controller"
date: 2024.07.15
category: Robotics
# internal note, not metadata
tags: [#MAIN, "Robotics"]
thumbnail: https://cdn.example.com/drone.png

status: Done
---

# Overview

Flight controller for a small swarm.
"#;

#[test]
fn parses_header_and_trims_content() {
    let parsed = parse_frontmatter(DRONE_RECORD);

    assert_eq!(parsed.text("id"), Some("drone-swarm"));
    assert_eq!(parsed.text("title"), Some("Drone Swarm Controller"));
    assert_eq!(parsed.text("date"), Some("2024.07.15"));
    assert_eq!(parsed.text("status"), Some("Done"));
    assert_eq!(
        parsed.content,
        "# Overview\n\nFlight controller for a small swarm."
    );
    assert!(!parsed.metadata.keys().any(|key| key.starts_with('#')));
}

#[test]
fn value_is_split_at_first_colon_only() {
    let parsed = parse_frontmatter(DRONE_RECORD);
    assert_eq!(
        parsed.text("thumbnail"),
        Some("https://cdn.example.com/drone.png")
    );
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(parse_frontmatter(DRONE_RECORD), parse_frontmatter(DRONE_RECORD));
}

#[test]
fn text_without_header_degrades_to_content_only() {
    let raw = "\n  Just a plain write-up.\nNo header here.  \n";
    let parsed = parse_frontmatter(raw);

    assert!(parsed.metadata.is_empty());
    assert!(!parsed.has_metadata());
    assert_eq!(parsed.content, raw.trim());
}

#[test]
fn unclosed_header_is_treated_as_content() {
    let raw = "---\ntitle: Half done\nbody without closing delimiter";
    let parsed = parse_frontmatter(raw);

    assert!(parsed.metadata.is_empty());
    assert_eq!(parsed.content, raw);
}

#[test]
fn quoted_tags_fall_back_to_comma_split() {
    let parsed = parse_frontmatter("---\ntags: [#MAIN, \"Robotics\"]\n---\nbody");

    assert_eq!(parsed.array_parse("tags"), Some(ArrayParse::Fallback));
    assert_eq!(
        parsed.list("tags"),
        Some(&[json!("#MAIN"), json!("Robotics")][..])
    );
}

#[test]
fn unquoted_tags_fall_back_to_comma_split() {
    let parsed = parse_frontmatter("---\ntags: [#MAIN, Robotics]\n---\n");

    assert_eq!(parsed.array_parse("tags"), Some(ArrayParse::Fallback));
    assert_eq!(
        parsed.list("tags"),
        Some(&[json!("#MAIN"), json!("Robotics")][..])
    );
}

#[test]
fn fallback_split_keeps_empty_items() {
    let parsed = parse_frontmatter("---\ntags: [#MAIN,, Robotics,]\n---\n");

    assert_eq!(parsed.array_parse("tags"), Some(ArrayParse::Fallback));
    assert_eq!(
        parsed.list("tags"),
        Some(&[json!("#MAIN"), json!(""), json!("Robotics"), json!("")][..])
    );
}

#[test]
fn valid_json_arrays_use_strict_stage() {
    let raw = r##"---
tags: ["#MAIN", "Embedded"]
links: [{"label": "Repo", "url": "https://example.com/repo"}]
---
"##;
    let parsed = parse_frontmatter(raw);

    assert_eq!(parsed.array_parse("tags"), Some(ArrayParse::Strict));
    assert_eq!(parsed.array_parse("links"), Some(ArrayParse::Strict));
    assert_eq!(
        parsed.list("links"),
        Some(&[json!({"label": "Repo", "url": "https://example.com/repo"})][..])
    );
}

#[test]
fn brackets_on_non_array_keys_stay_text() {
    let parsed = parse_frontmatter("---\nsummary: [draft] notes\ncategory: [A, B]\n---\n");

    assert_eq!(parsed.text("summary"), Some("[draft] notes"));
    assert_eq!(parsed.text("category"), Some("[A, B]"));
    assert_eq!(parsed.array_parse("category"), None);
}

#[test]
fn unbracketed_array_key_is_text() {
    let parsed = parse_frontmatter("---\ntags: \"#MAIN\"\n---\n");
    assert_eq!(
        parsed.metadata.get("tags"),
        Some(&MetaValue::Text("#MAIN".to_string()))
    );
}

#[test]
fn lines_without_colon_and_unknown_keys() {
    let raw = "---\njust words\nmood: \"focused\"\n: orphan value\n---\nbody";
    let parsed = parse_frontmatter(raw);

    assert_eq!(parsed.metadata.len(), 1);
    assert_eq!(parsed.text("mood"), Some("focused"));
}

#[test]
fn later_duplicate_key_overwrites_earlier() {
    let parsed = parse_frontmatter("---\ntitle: First\ntitle: Second\n---\n");
    assert_eq!(parsed.text("title"), Some("Second"));
}

#[test]
fn single_quotes_are_kept_on_scalar_values() {
    let parsed = parse_frontmatter("---\ntitle: 'Quoted'\n---\n");
    assert_eq!(parsed.text("title"), Some("'Quoted'"));
}
