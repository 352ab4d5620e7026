//! Skill declaration and evaluated skill models.
//!
//! # Invariants
//! - `category` is upper-case ASCII once produced by the declaration parser.
//! - `base_level` stays within `0..=100`.
//! - `Skill::level` is always within `[0, 100]`; it is recomputed per `now`
//!   and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Highest accepted base level in a declaration.
pub const MAX_BASE_LEVEL: u8 = 100;

/// Raw `(name, category, base level)` triple from the skill DSL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDeclaration {
    pub name: String,
    pub category: String,
    pub base_level: u8,
}

impl SkillDeclaration {
    /// Builds a declaration, upper-casing the category.
    pub fn new(name: impl Into<String>, category: &str, base_level: u8) -> Self {
        Self {
            name: name.into(),
            category: category.trim().to_ascii_uppercase(),
            base_level: base_level.min(MAX_BASE_LEVEL),
        }
    }
}

/// Ordinal label derived from a skill's current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
            Self::SS => "SS",
            Self::SSS => "SSS",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Declaration evaluated against one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub base_level: u8,
    /// Current level, clamped to `[0, 100]` and rounded to 2 decimals.
    pub level: f64,
    pub rank: Rank,
}

/// Title attached to the aggregate developer level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeveloperTitle {
    #[serde(rename = "INTERN")]
    Intern,
    #[serde(rename = "JUNIOR DEV")]
    JuniorDev,
    #[serde(rename = "MID-LEVEL DEV")]
    MidLevelDev,
    #[serde(rename = "SENIOR DEV")]
    SeniorDev,
    #[serde(rename = "LEAD DEV")]
    LeadDev,
    #[serde(rename = "ARCHITECT")]
    Architect,
}

impl DeveloperTitle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intern => "INTERN",
            Self::JuniorDev => "JUNIOR DEV",
            Self::MidLevelDev => "MID-LEVEL DEV",
            Self::SeniorDev => "SENIOR DEV",
            Self::LeadDev => "LEAD DEV",
            Self::Architect => "ARCHITECT",
        }
    }
}

impl Display for DeveloperTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
