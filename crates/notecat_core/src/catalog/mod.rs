//! Catalog loading and in-memory ownership.
//!
//! # Responsibility
//! - Parse the catalog document into validated records (all-or-nothing).
//! - Own the loaded catalog behind a narrow read API for the rest of core.
//!
//! # Invariants
//! - The store holds either the empty catalog or one successfully loaded
//!   document; there is no partial state.
//! - Load failures leave the store empty and interactive; nothing retries.

use crate::model::notebook::RecordValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod source;
mod store;

pub use source::{load_catalog_from_path, load_catalog_from_reader, load_catalog_from_str};
pub use store::CatalogStore;

pub type LoadResult<T> = Result<T, LoadError>;

/// Catalog load failure.
///
/// `Source` carries a failure reported by an external fetch collaborator
/// (for example a non-success HTTP status); core itself only produces the
/// other variants.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(RecordValidationError),
    Source(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog read failed: {err}"),
            Self::Parse(err) => write!(f, "catalog document is not valid JSON: {err}"),
            Self::Invalid(err) => write!(f, "catalog document rejected: {err}"),
            Self::Source(details) => write!(f, "catalog source failed: {details}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::Source(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RecordValidationError> for LoadError {
    fn from(value: RecordValidationError) -> Self {
        Self::Invalid(value)
    }
}
