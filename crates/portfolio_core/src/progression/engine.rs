//! Time-based skill levels, ranks and the aggregate developer level.
//!
//! # Responsibility
//! - Evaluate skill declarations against an explicit instant.
//! - Combine tenure, completed records and weighted skills into one level.
//!
//! # Invariants
//! - Every function is pure in `(inputs, now, config)`; nothing reads the
//!   clock, so repeated calls give bit-identical results.
//! - Skill levels are clamped to `[0, 100]` and rounded to 2 decimals.
//! - Elapsed time is floored at zero; `now` before a start date means no
//!   aging rather than negative growth.
//! - The aggregate never errors: invalid configured dates and non-finite
//!   totals yield `0.0`.
//! - `difficulty_factor` is not consumed here.

use crate::config::ProgressionConfig;
use crate::model::skill::{DeveloperTitle, Rank, Skill, SkillDeclaration};
use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use serde::Serialize;
use std::collections::BTreeMap;

const MILLIS_PER_DAY: f64 = 86_400_000.0;
const DAYS_PER_YEAR: f64 = 365.25;
const MAX_LEVEL: f64 = 100.0;

const STUDY_POINTS_PER_YEAR: f64 = 2.0;
const CAREER_POINTS_PER_YEAR: f64 = 20.0;
const POINTS_PER_COMPLETED_RECORD: f64 = 3.0;
const SKILL_SCORE_FACTOR: f64 = 0.05;

const RANK_THRESHOLDS: &[(f64, Rank)] = &[
    (100.0, Rank::SSS),
    (95.0, Rank::SS),
    (90.0, Rank::S),
    (60.0, Rank::A),
    (50.0, Rank::B),
    (40.0, Rank::C),
    (20.0, Rank::D),
];

const TITLE_THRESHOLDS: &[(f64, DeveloperTitle)] = &[
    (90.0, DeveloperTitle::Architect),
    (70.0, DeveloperTitle::LeadDev),
    (50.0, DeveloperTitle::SeniorDev),
    (30.0, DeveloperTitle::MidLevelDev),
    (10.0, DeveloperTitle::JuniorDev),
];

/// Component scores of one aggregate evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LevelBreakdown {
    pub study_years: f64,
    pub career_years: f64,
    pub study_score: f64,
    pub career_score: f64,
    pub project_score: f64,
    pub skill_score: f64,
    pub total: f64,
}

/// Fractional days from `start` to `now`, floored at zero.
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let millis = now.signed_duration_since(start).num_milliseconds().max(0);
    millis as f64 / MILLIS_PER_DAY
}

fn elapsed_years(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    elapsed_days(start, end) / DAYS_PER_YEAR
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn level_after(base_level: u8, days: f64, growth_rate: f64) -> f64 {
    let growth = days * growth_rate;
    let growth = if growth.is_nan() { 0.0 } else { growth };
    round2((f64::from(base_level) + growth).clamp(0.0, MAX_LEVEL))
}

fn study_days(now: DateTime<Utc>, config: &ProgressionConfig) -> f64 {
    match config.study_start() {
        Some(start) => elapsed_days(start, now),
        None => {
            warn!(
                "event=skill_level module=progression status=warn reason=invalid_study_start value={}",
                config.study_start_date
            );
            0.0
        }
    }
}

/// Current level of a skill declared at `base_level`.
///
/// `base + days_since_study_start * growth_rate`, clamped and rounded.
pub fn skill_level(base_level: u8, now: DateTime<Utc>, config: &ProgressionConfig) -> f64 {
    level_after(base_level, study_days(now, config), config.growth_rate)
}

/// Rank for a level. Thresholds are inclusive; the highest match wins.
pub fn rank_for_level(level: f64) -> Rank {
    RANK_THRESHOLDS
        .iter()
        .find(|(threshold, _)| level >= *threshold)
        .map_or(Rank::E, |(_, rank)| *rank)
}

/// Evaluates one declaration at `now`.
pub fn evaluate_skill(
    declaration: &SkillDeclaration,
    now: DateTime<Utc>,
    config: &ProgressionConfig,
) -> Skill {
    let level = skill_level(declaration.base_level, now, config);
    skill_from(declaration, level)
}

/// Evaluates all declarations at `now`, preserving order.
pub fn evaluate_skills(
    declarations: &[SkillDeclaration],
    now: DateTime<Utc>,
    config: &ProgressionConfig,
) -> Vec<Skill> {
    if declarations.is_empty() {
        return Vec::new();
    }
    let days = study_days(now, config);
    declarations
        .iter()
        .map(|declaration| {
            let level = level_after(declaration.base_level, days, config.growth_rate);
            skill_from(declaration, level)
        })
        .collect()
}

fn skill_from(declaration: &SkillDeclaration, level: f64) -> Skill {
    Skill {
        name: declaration.name.clone(),
        category: declaration.category.clone(),
        base_level: declaration.base_level,
        level,
        rank: rank_for_level(level),
    }
}

/// Groups skills by category; order inside a category follows input order.
pub fn group_by_category(skills: &[Skill]) -> BTreeMap<String, Vec<Skill>> {
    let mut grouped = BTreeMap::<String, Vec<Skill>>::new();
    for skill in skills {
        grouped
            .entry(skill.category.clone())
            .or_default()
            .push(skill.clone());
    }
    grouped
}

/// Computes every component of the aggregate developer level.
///
/// Returns an all-zero breakdown when a configured date is invalid.
pub fn aggregate_breakdown(
    skills: &[Skill],
    completed_records: usize,
    now: DateTime<Utc>,
    config: &ProgressionConfig,
) -> LevelBreakdown {
    let (Some(study_start), Some(career_start)) = (config.study_start(), config.career_start())
    else {
        error!(
            "event=aggregate_level module=progression status=error reason=invalid_date study_start={} career_start={}",
            config.study_start_date,
            config.career_start_date.as_deref().unwrap_or("<none>")
        );
        return LevelBreakdown::default();
    };
    let career_start = career_start.unwrap_or(now);

    let study_years = elapsed_years(study_start, career_start);
    let career_years = elapsed_years(career_start, now);
    let study_score = study_years * STUDY_POINTS_PER_YEAR;
    let career_score = career_years * CAREER_POINTS_PER_YEAR;
    let project_score = completed_records as f64 * POINTS_PER_COMPLETED_RECORD;
    let skill_score: f64 = skills
        .iter()
        .map(|skill| skill.level * config.category_weight(&skill.category) * SKILL_SCORE_FACTOR)
        .filter(|score| score.is_finite())
        .sum();

    let total = study_score + career_score + project_score + skill_score;
    let total = if total.is_finite() {
        total
    } else {
        warn!("event=aggregate_level module=progression status=warn reason=non_finite_total");
        0.0
    };

    debug!(
        "event=aggregate_level module=progression status=ok skills={} completed={} total={:.2}",
        skills.len(),
        completed_records,
        total
    );

    LevelBreakdown {
        study_years,
        career_years,
        study_score,
        career_score,
        project_score,
        skill_score,
        total,
    }
}

/// Aggregate developer level; `0.0` on invalid dates or non-finite totals.
pub fn aggregate_level(
    skills: &[Skill],
    completed_records: usize,
    now: DateTime<Utc>,
    config: &ProgressionConfig,
) -> f64 {
    aggregate_breakdown(skills, completed_records, now, config).total
}

/// Title for an aggregate level.
pub fn developer_title(level: f64) -> DeveloperTitle {
    TITLE_THRESHOLDS
        .iter()
        .find(|(threshold, _)| level >= *threshold)
        .map_or(DeveloperTitle::Intern, |(_, title)| *title)
}
