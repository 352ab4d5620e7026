//! Text parsers for author-maintained sources.
//!
//! # Responsibility
//! - Parse record frontmatter into metadata + markdown content.
//! - Parse the skill declaration DSL.
//!
//! # Invariants
//! - Parsers never return errors; malformed lines are skipped or degraded
//!   and reported through debug/warn logs only.

pub mod frontmatter;
pub mod skill_decl;
