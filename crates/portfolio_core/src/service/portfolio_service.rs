//! Portfolio progression use-case service.
//!
//! # Responsibility
//! - Combine the record collection, skill declarations and configuration
//!   into one progression report.
//! - Surface tolerated data problems (duplicate skill names) through logs.
//!
//! # Invariants
//! - Reports are deterministic for the same inputs and `now`.
//! - Only records with status `Done` count as completed.

use crate::config::ProgressionConfig;
use crate::model::skill::{DeveloperTitle, Skill, SkillDeclaration};
use crate::parser::skill_decl::{duplicate_skill_names, parse_skill_declarations};
use crate::progression::engine::{
    aggregate_breakdown, developer_title, evaluate_skills, group_by_category, LevelBreakdown,
};
use crate::repo::record_repo::RecordRepository;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// Progression snapshot for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionReport {
    /// Instant the report was evaluated at.
    pub evaluated_at: DateTime<Utc>,
    /// Evaluated skills in declaration order.
    pub skills: Vec<Skill>,
    /// Same skills grouped by upper-case category.
    pub skills_by_category: BTreeMap<String, Vec<Skill>>,
    pub completed_records: usize,
    pub breakdown: LevelBreakdown,
    /// Aggregate developer level (`breakdown.total`).
    pub level: f64,
    pub title: DeveloperTitle,
}

/// Service facade holding the progression configuration.
pub struct PortfolioService {
    config: ProgressionConfig,
}

impl PortfolioService {
    pub fn new(config: ProgressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Builds the report from already parsed declarations.
    pub fn report(
        &self,
        records: &RecordRepository,
        declarations: &[SkillDeclaration],
        now: DateTime<Utc>,
    ) -> ProgressionReport {
        let duplicates = duplicate_skill_names(declarations);
        if !duplicates.is_empty() {
            warn!(
                "event=progression_report module=service status=warn reason=duplicate_skill names={}",
                duplicates.join(",")
            );
        }

        let skills = evaluate_skills(declarations, now, &self.config);
        let completed_records = records.completed_count();
        let breakdown = aggregate_breakdown(&skills, completed_records, now, &self.config);
        let title = developer_title(breakdown.total);

        info!(
            "event=progression_report module=service status=ok skills={} records={} completed={} title={}",
            skills.len(),
            records.len(),
            completed_records,
            title
        );

        ProgressionReport {
            evaluated_at: now,
            skills_by_category: group_by_category(&skills),
            skills,
            completed_records,
            breakdown,
            level: breakdown.total,
            title,
        }
    }

    /// Parses the skill DSL, then builds the report.
    pub fn report_from_text(
        &self,
        records: &RecordRepository,
        skill_text: &str,
        now: DateTime<Utc>,
    ) -> ProgressionReport {
        let declarations = parse_skill_declarations(skill_text);
        self.report(records, &declarations, now)
    }
}
