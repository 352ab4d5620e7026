//! Record frontmatter parser.
//!
//! # Responsibility
//! - Split raw record text into a `---` delimited header and a markdown body.
//! - Turn header lines into a key/value map with typed array values.
//!
//! # Invariants
//! - Parsing never fails; malformed input degrades to a smaller result.
//! - Text without a complete header yields empty metadata and the whole
//!   input (trimmed) as content.
//! - Array keys use a strict JSON attempt first, then the comma-split
//!   fallback. Both stages are observable through `ParsedRecord::array_parse`.
//! - The parser does not know the `Record` schema; unknown keys pass through.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

const HEADER_DELIMITER: &str = "---";

/// Header keys whose bracketed values are parsed as arrays.
pub const ARRAY_KEYS: &[&str] = &["tags", "links"];

/// One parsed header value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Scalar value with one layer of double quotes removed.
    Text(String),
    /// Bracketed array value. Fallback parses contain only JSON strings.
    List(Vec<Value>),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items.as_slice()),
        }
    }
}

/// Which stage produced an array value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayParse {
    /// The bracketed value was valid JSON.
    Strict,
    /// JSON parsing failed; the interior was split on commas.
    Fallback,
}

/// Result of parsing one record source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedRecord {
    pub metadata: BTreeMap<String, MetaValue>,
    pub content: String,
    #[serde(skip)]
    array_parses: BTreeMap<String, ArrayParse>,
}

impl ParsedRecord {
    /// Text value for `key`, if present and scalar.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(MetaValue::as_text)
    }

    /// Array value for `key`, if present and bracketed.
    pub fn list(&self, key: &str) -> Option<&[Value]> {
        self.metadata.get(key).and_then(MetaValue::as_list)
    }

    /// Parse stage used for the array stored under `key`.
    pub fn array_parse(&self, key: &str) -> Option<ArrayParse> {
        self.array_parses.get(key).copied()
    }

    /// Whether any header key was recognized.
    pub fn has_metadata(&self) -> bool {
        !self.metadata.is_empty()
    }
}

/// Parses raw record text into metadata and content.
pub fn parse_frontmatter(raw: &str) -> ParsedRecord {
    let Some((header, body)) = split_header(raw) else {
        return ParsedRecord {
            content: raw.trim().to_string(),
            ..ParsedRecord::default()
        };
    };

    let mut parsed = ParsedRecord {
        content: body.trim().to_string(),
        ..ParsedRecord::default()
    };

    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            continue;
        }

        if ARRAY_KEYS.contains(&key) {
            if let Some((items, stage)) = parse_array_value(value) {
                if stage == ArrayParse::Fallback {
                    debug!(
                        "event=frontmatter_array module=parser status=fallback key={} items={}",
                        key,
                        items.len()
                    );
                }
                parsed.array_parses.insert(key.to_string(), stage);
                parsed
                    .metadata
                    .insert(key.to_string(), MetaValue::List(items));
                continue;
            }
        }

        parsed.array_parses.remove(key);
        parsed.metadata.insert(
            key.to_string(),
            MetaValue::Text(strip_quotes(value, &['"']).to_string()),
        );
    }

    parsed
}

/// Returns `(header, body)` when the text opens with a `---` line and has a
/// matching closing `---` line.
fn split_header(raw: &str) -> Option<(&str, &str)> {
    let text = raw.trim_start();
    let mut lines = text.split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim() != HEADER_DELIMITER {
        return None;
    }

    let header_start = opening.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim() == HEADER_DELIMITER {
            return Some((&text[header_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Two-stage array parse. `None` when the value is not bracketed.
fn parse_array_value(value: &str) -> Option<(Vec<Value>, ArrayParse)> {
    if value.len() < 2 || !value.starts_with('[') || !value.ends_with(']') {
        return None;
    }

    if let Ok(items) = serde_json::from_str::<Vec<Value>>(value) {
        return Some((items, ArrayParse::Strict));
    }

    let interior = &value[1..value.len() - 1];
    let items = interior
        .split(',')
        .map(|item| Value::String(strip_quotes(item.trim(), &['"', '\'']).to_string()))
        .collect();
    Some((items, ArrayParse::Fallback))
}

/// Removes one layer of matching enclosing quotes.
fn strip_quotes<'a>(value: &'a str, quotes: &[char]) -> &'a str {
    for quote in quotes {
        if value.len() >= 2 && value.starts_with(*quote) && value.ends_with(*quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
