//! Skill declaration DSL parser.
//!
//! One declaration per line: `<Name> : [ <CATEGORY>, <BaseLevel> ]`.
//!
//! # Invariants
//! - Blank lines and `//` comment lines are ignored.
//! - The name is the text before the first `:`; the first `[CATEGORY, level]`
//!   group after it is used and trailing text is ignored.
//! - Lines that do not match, or declare a base level above 100, are skipped.
//! - Output follows input line order; repeated names are kept.

use crate::model::skill::{SkillDeclaration, MAX_BASE_LEVEL};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static LEVEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*([A-Za-z0-9_]+)\s*,\s*(\d+)\s*\]").expect("valid skill level group regex")
});

/// Parses every well-formed declaration in `raw`.
pub fn parse_skill_declarations(raw: &str) -> Vec<SkillDeclaration> {
    raw.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Option<SkillDeclaration> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return None;
    }

    let Some((name, caps)) = trimmed
        .split_once(':')
        .map(|(name, rest)| (name.trim(), rest))
        .filter(|(name, _)| !name.is_empty())
        .and_then(|(name, rest)| LEVEL_GROUP_RE.captures(rest).map(|caps| (name, caps)))
    else {
        debug!(
            "event=skill_decl_parse module=parser status=skipped line={} reason=pattern",
            line_no
        );
        return None;
    };

    let base_level = caps[2]
        .parse::<u8>()
        .ok()
        .filter(|value| *value <= MAX_BASE_LEVEL);
    let Some(base_level) = base_level else {
        warn!(
            "event=skill_decl_parse module=parser status=skipped line={} reason=base_level value={}",
            line_no,
            &caps[2]
        );
        return None;
    };

    Some(SkillDeclaration::new(name, &caps[1], base_level))
}

/// Names declared more than once, in order of first appearance.
pub fn duplicate_skill_names(declarations: &[SkillDeclaration]) -> Vec<String> {
    let mut counts = BTreeMap::<&str, usize>::new();
    for declaration in declarations {
        *counts.entry(declaration.name.as_str()).or_default() += 1;
    }

    let mut duplicates = Vec::new();
    for declaration in declarations {
        let name = declaration.name.as_str();
        if counts.get(name).copied().unwrap_or(0) > 1 && !duplicates.iter().any(|d| d == name) {
            duplicates.push(name.to_string());
        }
    }
    duplicates
}
