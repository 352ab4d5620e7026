//! Project record domain model.
//!
//! # Responsibility
//! - Define the normalized entity produced from one record source.
//! - Provide small read-only helpers used by presentation consumers.
//!
//! # Invariants
//! - `id` is never empty once the repository has built the record.
//! - Records are immutable after construction; a reload rebuilds them all.
//! - `date` is kept as written (`YYYY.MM[.DD]`) so string order is date order.

use serde::{Deserialize, Serialize};

/// Completion state declared by a record's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Finished project; counts toward the aggregate level.
    Done,
    /// Work is ongoing.
    #[serde(rename = "In Progress")]
    InProgress,
}

impl RecordStatus {
    /// Parses the label exactly as authors write it in record headers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Done" => Some(Self::Done),
            "In Progress" => Some(Self::InProgress),
            _ => None,
        }
    }

    /// External label (`Done` / `In Progress`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::InProgress => "In Progress",
        }
    }
}

/// One labelled outbound link of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLink {
    pub label: String,
    pub url: String,
}

impl RecordLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Canonical project entry built from frontmatter and markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key inside one loaded collection.
    pub id: String,
    pub title: String,
    /// Sortable date string, `YYYY.MM` or `YYYY.MM.DD`.
    pub date: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Ordered as written; `#MAIN` marks featured projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub thumbnail: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<RecordLink>>,
    /// Markdown body with the header removed.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl Record {
    /// Creates a record with empty metadata fields.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            date: String::new(),
            category: String::new(),
            company: None,
            tags: None,
            thumbnail: String::new(),
            summary: String::new(),
            links: None,
            content: content.into(),
            status: None,
            preview: None,
        }
    }

    /// Leading year segment of `date`, or `None` when `date` is empty.
    pub fn year(&self) -> Option<&str> {
        self.date
            .split('.')
            .next()
            .map(str::trim)
            .filter(|year| !year.is_empty())
    }

    /// Whether the record is marked `Done`.
    pub fn is_completed(&self) -> bool {
        self.status == Some(RecordStatus::Done)
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|value| value == tag))
    }
}
