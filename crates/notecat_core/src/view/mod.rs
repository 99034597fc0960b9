//! View state machine and rendering projections.
//!
//! # Responsibility
//! - Route typed user events through the List/Comparison state machine.
//! - Derive pure projections (list cards, comparison table) and hand them
//!   to the rendering surface behind the `Renderer` trait.
//!
//! # Invariants
//! - Exactly one view mode is active at a time; initial mode is List.
//! - Projections carry no rendering substrate details.

pub mod controller;
pub mod table;
