//! Comparison selection and validity.
//!
//! # Responsibility
//! - Hold the three picker slots the user fills for comparison.
//! - Resolve a selection into records, enforcing the validity rules.
//!
//! # Invariants
//! - Slots persist across filter changes and comparison round-trips; core
//!   never clears them implicitly.
//! - Resolution order is first-seen slot order, not catalog order.
//! - Duplicate identifiers across slots collapse silently to one record.

use crate::catalog::CatalogStore;
use crate::model::notebook::NotebookRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of independent picker slots.
pub const SELECTION_SLOTS: usize = 3;

/// Selection failure surfaced as a blocking user notice.
///
/// Neither variant mutates state or changes the view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Fewer than two distinct identifiers were picked.
    InsufficientSelection,
    /// Every picked identifier was stale or unknown.
    NoValidSelection,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientSelection => {
                write!(f, "select at least two distinct notebooks to compare")
            }
            Self::NoValidSelection => {
                write!(f, "none of the selected notebooks exist in the catalog")
            }
        }
    }
}

impl Error for ValidationError {}

/// The three comparison picker slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    slots: [Option<String>; SELECTION_SLOTS],
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one picker emission. `None` represents the empty choice.
    ///
    /// Returns `false` for out-of-range slot indices so the caller can log
    /// and drop the event instead of panicking.
    pub fn set_slot(&mut self, index: usize, identifier: Option<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = identifier.filter(|id| !id.is_empty());
                true
            }
            None => false,
        }
    }

    pub fn slots(&self) -> &[Option<String>; SELECTION_SLOTS] {
        &self.slots
    }

    /// Picked identifiers with empty slots discarded and duplicates
    /// collapsed, in first-seen slot order.
    pub fn distinct_identifiers(&self) -> Vec<&str> {
        let mut distinct: Vec<&str> = Vec::with_capacity(SELECTION_SLOTS);
        for slot in self.slots.iter().flatten() {
            if !distinct.contains(&slot.as_str()) {
                distinct.push(slot);
            }
        }
        distinct
    }
}

/// Resolves the selection into comparison records.
///
/// Validity rules:
/// 1. At least two distinct identifiers after discarding empty slots,
///    otherwise `InsufficientSelection`.
/// 2. Identifiers unknown to the catalog are dropped; if none survive,
///    `NoValidSelection`.
///
/// On success the records come back in first-seen slot order. A selection
/// that passes rule 1 but resolves to a single record still succeeds; only
/// zero resolved records is an error.
pub fn resolve_selection<'a>(
    store: &'a CatalogStore,
    selection: &SelectionSet,
) -> Result<Vec<&'a NotebookRecord>, ValidationError> {
    let distinct = selection.distinct_identifiers();
    if distinct.len() < 2 {
        return Err(ValidationError::InsufficientSelection);
    }

    let resolved: Vec<&NotebookRecord> = distinct
        .iter()
        .filter_map(|name| store.resolve(name))
        .collect();
    if resolved.is_empty() {
        return Err(ValidationError::NoValidSelection);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::{SelectionSet, SELECTION_SLOTS};

    #[test]
    fn set_slot_rejects_out_of_range_index() {
        let mut selection = SelectionSet::new();
        assert!(!selection.set_slot(SELECTION_SLOTS, Some("A".to_string())));
        assert!(selection.slots().iter().all(Option::is_none));
    }

    #[test]
    fn empty_string_counts_as_empty_slot() {
        let mut selection = SelectionSet::new();
        assert!(selection.set_slot(0, Some(String::new())));
        assert!(selection.slots()[0].is_none());
    }

    #[test]
    fn distinct_identifiers_keep_first_seen_slot_order() {
        let mut selection = SelectionSet::new();
        selection.set_slot(0, Some("B".to_string()));
        selection.set_slot(1, None);
        selection.set_slot(2, Some("A".to_string()));
        assert_eq!(selection.distinct_identifiers(), vec!["B", "A"]);
    }

    #[test]
    fn distinct_identifiers_collapse_duplicates() {
        let mut selection = SelectionSet::new();
        selection.set_slot(0, Some("A".to_string()));
        selection.set_slot(1, Some("A".to_string()));
        assert_eq!(selection.distinct_identifiers(), vec!["A"]);
    }
}
