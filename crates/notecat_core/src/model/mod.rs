//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical notebook record shared by list and comparison
//!   projections.
//! - Keep wire-format naming isolated behind serde attributes.
//!
//! # Invariants
//! - Records are immutable after a successful catalog load.
//! - A record's `name` is its resolution key everywhere in core.

pub mod notebook;
