//! Profile filtering.
//!
//! # Responsibility
//! - Map the wire sentinel and concrete tags into a typed filter state.
//! - Derive the visible subset of the catalog for the list projection.
//!
//! # Invariants
//! - Filtering preserves catalog order and never copies records.
//! - Tag membership is exact string equality, never case-folded.

use crate::model::notebook::NotebookRecord;

/// Wire sentinel meaning "show every profile".
pub const ALL_PROFILES_TAG: &str = "todos";

/// Active profile filter state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileFilter {
    /// Show the full catalog.
    #[default]
    All,
    /// Show only records whose profile set contains this tag.
    Tag(String),
}

impl ProfileFilter {
    /// Parses the tag emitted by the profile selector control.
    ///
    /// The sentinel string appears here and in `as_tag` only; everything
    /// else in core works with the typed state.
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_PROFILES_TAG {
            Self::All
        } else {
            Self::Tag(tag.to_string())
        }
    }

    /// Wire representation, for logging and round-tripping to controls.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::All => ALL_PROFILES_TAG,
            Self::Tag(tag) => tag,
        }
    }
}

/// Pure, order-preserving profile filter over the catalog.
///
/// `All` yields every record; a concrete tag yields exactly the records
/// whose profile set contains it. An empty result is a legal outcome the
/// view layer turns into an explicit no-results indication.
pub fn filter_by_profile<'a>(
    catalog: &'a [NotebookRecord],
    filter: &ProfileFilter,
) -> Vec<&'a NotebookRecord> {
    match filter {
        ProfileFilter::All => catalog.iter().collect(),
        ProfileFilter::Tag(tag) => catalog.iter().filter(|nb| nb.has_profile(tag)).collect(),
    }
}
