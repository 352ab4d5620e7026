//! Progression engine: skill levels, ranks, aggregate level and title.

pub mod engine;
