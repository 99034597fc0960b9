//! Core use-case services.
//!
//! # Responsibility
//! - Provide the pure filter and selection-resolution operations the view
//!   controller orchestrates.
//! - Keep the rendering layer decoupled from catalog internals.

pub mod filter;
pub mod selection;
