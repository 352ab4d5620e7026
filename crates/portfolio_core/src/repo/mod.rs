//! Repository layer for record collections.
//!
//! # Responsibility
//! - Turn externally enumerated sources into a normalized record collection.
//! - Keep parsing details out of service/presentation callers.
//!
//! # Invariants
//! - The collection is rebuilt wholesale on every load; no incremental
//!   updates and no persistence.

pub mod record_repo;
