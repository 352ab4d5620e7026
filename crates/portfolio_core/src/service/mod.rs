//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository, parser and engine calls into use-case APIs.
//! - Keep CLI/presentation layers decoupled from computation details.

pub mod portfolio_service;
