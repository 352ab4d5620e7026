//! Domain model for project records and skill progression.
//!
//! # Responsibility
//! - Define the entities shared by parsers, repository and engine.
//! - Keep evaluated values (`Skill`) separate from declared ones.
//!
//! # Invariants
//! - Model values are immutable snapshots; nothing here reads the clock.

pub mod record;
pub mod skill;
