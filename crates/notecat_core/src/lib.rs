//! Core domain logic for Notecat.
//! This crate is the single source of truth for business invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;
pub mod view;

pub use catalog::{
    load_catalog_from_path, load_catalog_from_reader, load_catalog_from_str, CatalogStore,
    LoadError, LoadResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notebook::{NotebookRecord, RecordValidationError};
pub use service::filter::{filter_by_profile, ProfileFilter, ALL_PROFILES_TAG};
pub use service::selection::{
    resolve_selection, SelectionSet, ValidationError, SELECTION_SLOTS,
};
pub use view::controller::{AppEvent, NotebookCard, Renderer, ViewController, ViewMode};
pub use view::table::{build_table, TableModel, TableRow, MISSING_VALUE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
