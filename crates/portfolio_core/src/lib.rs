//! Core domain logic for the portfolio site.
//! Parses project records and skill declarations and computes progression
//! metrics; presentation layers consume the resulting values.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod progression;
pub mod repo;
pub mod service;

pub use config::{ConfigError, ProgressionConfig, DEFAULT_CATEGORY_WEIGHT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Record, RecordLink, RecordStatus};
pub use model::skill::{DeveloperTitle, Rank, Skill, SkillDeclaration};
pub use parser::frontmatter::{parse_frontmatter, ArrayParse, MetaValue, ParsedRecord};
pub use parser::skill_decl::{duplicate_skill_names, parse_skill_declarations};
pub use progression::engine::{
    aggregate_breakdown, aggregate_level, developer_title, evaluate_skill, evaluate_skills,
    group_by_category, rank_for_level, skill_level, LevelBreakdown,
};
pub use repo::record_repo::{
    DuplicatePolicy, RecordRepository, RecordSource, RepoError, RepoResult,
};
pub use service::portfolio_service::{PortfolioService, ProgressionReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
