//! Record repository: builds the record collection from raw sources.
//!
//! # Responsibility
//! - Run the frontmatter parser over each `(path, raw_text)` source.
//! - Overlay parsed metadata onto record defaults and derive identity.
//! - Offer read-only queries used by presentation consumers.
//!
//! # Invariants
//! - `id` comes from metadata when present, otherwise from the source file
//!   stem; it is never empty.
//! - Ids are unique in a loaded repository. Collisions follow an explicit
//!   `DuplicatePolicy`; the default keeps the first occurrence.
//! - Records keep source order; sorting is done by query helpers only.
//! - Loading never touches the file system; callers supply the text.

use crate::model::record::{Record, RecordLink, RecordStatus};
use crate::parser::frontmatter::{parse_frontmatter, MetaValue, ParsedRecord};
use log::{info, warn};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record collection loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Two sources resolved to the same id under `DuplicatePolicy::Reject`.
    DuplicateId(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
        }
    }
}

impl Error for RepoError {}

/// What to do when two sources produce the same record id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the earliest source; later ones are dropped with a warning.
    #[default]
    KeepFirst,
    /// Later sources replace earlier ones in the earlier slot.
    KeepLast,
    /// Fail the load.
    Reject,
}

/// One raw record source supplied by an external enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSource {
    pub path: PathBuf,
    pub raw_text: String,
}

impl RecordSource {
    pub fn new(path: impl Into<PathBuf>, raw_text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// In-memory record collection for one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordRepository {
    records: Vec<Record>,
}

impl RecordRepository {
    /// Loads all sources with `DuplicatePolicy::KeepFirst`.
    pub fn load_all(sources: &[RecordSource]) -> Self {
        let built = sources
            .iter()
            .enumerate()
            .map(|(index, source)| build_record(index, source))
            .collect();
        let records = dedup_keep_first(built);
        info!(
            "event=records_load module=repo status=ok sources={} records={}",
            sources.len(),
            records.len()
        );
        Self { records }
    }

    /// Loads all sources with an explicit collision policy.
    ///
    /// # Errors
    /// - `RepoError::DuplicateId` when `policy` is `Reject` and two sources
    ///   share an id.
    pub fn load_all_with_policy(
        sources: &[RecordSource],
        policy: DuplicatePolicy,
    ) -> RepoResult<Self> {
        if policy == DuplicatePolicy::KeepFirst {
            return Ok(Self::load_all(sources));
        }

        let mut records: Vec<Record> = Vec::with_capacity(sources.len());
        let mut positions = HashMap::<String, usize>::new();
        for (index, source) in sources.iter().enumerate() {
            let record = build_record(index, source);
            let Some(&slot) = positions.get(&record.id) else {
                positions.insert(record.id.clone(), records.len());
                records.push(record);
                continue;
            };

            if policy == DuplicatePolicy::Reject {
                warn!(
                    "event=records_load module=repo status=error reason=duplicate_id id={}",
                    record.id
                );
                return Err(RepoError::DuplicateId(record.id));
            }
            warn!(
                "event=records_load module=repo status=warn reason=duplicate_id policy=keep_last id={} path={}",
                record.id,
                source.path.display()
            );
            records[slot] = record;
        }

        info!(
            "event=records_load module=repo status=ok sources={} records={}",
            sources.len(),
            records.len()
        );
        Ok(Self { records })
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records whose status is `Done`.
    pub fn completed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.is_completed())
            .count()
    }

    /// Records carrying `tag` (exact match, e.g. `#MAIN`).
    pub fn with_tag(&self, tag: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.has_tag(tag))
            .collect()
    }

    /// Records whose company equals `company` exactly.
    pub fn by_company(&self, company: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.company.as_deref() == Some(company))
            .collect()
    }

    /// Records whose date starts with `year`.
    pub fn by_year(&self, year: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.year() == Some(year))
            .collect()
    }

    /// Distinct record years, newest first.
    pub fn years_desc(&self) -> Vec<String> {
        let years: BTreeSet<&str> = self.records.iter().filter_map(Record::year).collect();
        years.into_iter().rev().map(str::to_string).collect()
    }

    /// Records ordered by `date DESC, id ASC`.
    pub fn sorted_by_date_desc(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        sorted
    }
}

fn dedup_keep_first(records: Vec<Record>) -> Vec<Record> {
    let mut seen = BTreeSet::<String>::new();
    let mut kept = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(record.id.clone()) {
            kept.push(record);
        } else {
            warn!(
                "event=records_load module=repo status=warn reason=duplicate_id policy=keep_first id={}",
                record.id
            );
        }
    }
    kept
}

/// Source file stem, e.g. `projects/drone.md` -> `drone`.
pub fn candidate_id(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

fn build_record(index: usize, source: &RecordSource) -> Record {
    let parsed = parse_frontmatter(&source.raw_text);
    let id = non_empty_text(&parsed, "id")
        .or_else(|| candidate_id(&source.path))
        .unwrap_or_else(|| format!("record-{index}"));

    let mut record = Record::new(id, parsed.content.clone());
    record.title = text_or_empty(&parsed, "title");
    record.date = text_or_empty(&parsed, "date");
    record.category = text_or_empty(&parsed, "category");
    record.thumbnail = text_or_empty(&parsed, "thumbnail");
    record.summary = text_or_empty(&parsed, "summary");
    record.company = non_empty_text(&parsed, "company");
    record.preview = non_empty_text(&parsed, "preview");
    record.tags = parsed.metadata.get("tags").and_then(tags_from);
    record.links = parsed.metadata.get("links").and_then(links_from);
    record.status = non_empty_text(&parsed, "status").and_then(|raw| {
        let status = RecordStatus::parse(&raw);
        if status.is_none() {
            warn!(
                "event=record_build module=repo status=warn reason=unknown_status id={} value={}",
                record.id, raw
            );
        }
        status
    });
    record
}

fn text_or_empty(parsed: &ParsedRecord, key: &str) -> String {
    parsed.text(key).unwrap_or_default().to_string()
}

fn non_empty_text(parsed: &ParsedRecord, key: &str) -> Option<String> {
    parsed
        .text(key)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn tags_from(value: &MetaValue) -> Option<Vec<String>> {
    match value {
        MetaValue::List(items) => Some(items.iter().filter_map(tag_from_json).collect()),
        MetaValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| vec![trimmed.to_string()])
        }
    }
}

fn tag_from_json(value: &Value) -> Option<String> {
    match value {
        Value::String(tag) => Some(tag.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn links_from(value: &MetaValue) -> Option<Vec<RecordLink>> {
    match value {
        MetaValue::List(items) => Some(items.iter().filter_map(link_from_json).collect()),
        MetaValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| vec![RecordLink::new(trimmed, trimmed)])
        }
    }
}

fn link_from_json(value: &Value) -> Option<RecordLink> {
    match value {
        Value::String(url) => Some(RecordLink::new(url.as_str(), url.as_str())),
        Value::Object(_) => serde_json::from_value(value.clone()).ok(),
        _ => None,
    }
}
