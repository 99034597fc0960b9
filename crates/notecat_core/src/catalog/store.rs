//! In-memory catalog store.
//!
//! # Responsibility
//! - Own the loaded catalog for the lifetime of the session.
//! - Resolve identifiers to records and expose picker candidates.
//!
//! # Invariants
//! - Lifecycle is empty -> loaded; `install` replaces wholesale.
//! - Resolution under duplicate names is first match in catalog order.

use crate::model::notebook::NotebookRecord;
use log::info;

/// Owner of the loaded catalog.
///
/// Starts empty; events that arrive before the load completes operate on the
/// empty catalog, which is a legal degenerate state rather than an error.
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<NotebookRecord>,
}

impl CatalogStore {
    /// Creates a store with the empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with a successfully loaded document.
    pub fn install(&mut self, records: Vec<NotebookRecord>) {
        info!(
            "event=catalog_install module=catalog status=ok records={}",
            records.len()
        );
        self.records = records;
    }

    /// Full catalog in document order.
    pub fn records(&self) -> &[NotebookRecord] {
        &self.records
    }

    /// Identifiers of every record, in document order.
    ///
    /// This is the picker candidate list: always the unfiltered catalog,
    /// deliberately decoupled from the active profile filter.
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|nb| nb.name.clone()).collect()
    }

    /// Resolves one identifier to its record. First match wins when the
    /// document contains duplicate names.
    pub fn resolve(&self, name: &str) -> Option<&NotebookRecord> {
        self.records.iter().find(|nb| nb.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogStore;
    use crate::model::notebook::NotebookRecord;

    fn record(name: &str, description: &str) -> NotebookRecord {
        NotebookRecord {
            name: name.to_string(),
            description: Some(description.to_string()),
            image: None,
            processor: None,
            memory: None,
            storage: None,
            display: None,
            graphics: None,
            operating_system: None,
            positives: None,
            negatives: None,
            profiles: vec!["gamer".to_string()],
        }
    }

    #[test]
    fn resolve_returns_first_match_under_duplicate_names() {
        let mut store = CatalogStore::new();
        store.install(vec![record("Twin", "first"), record("Twin", "second")]);

        let resolved = store.resolve("Twin").unwrap();
        assert_eq!(resolved.description.as_deref(), Some("first"));
    }

    #[test]
    fn names_lists_full_catalog_in_order() {
        let mut store = CatalogStore::new();
        store.install(vec![record("B", ""), record("A", "")]);
        assert_eq!(store.names(), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn empty_store_resolves_nothing() {
        let store = CatalogStore::new();
        assert!(store.is_empty());
        assert!(store.resolve("anything").is_none());
    }
}
