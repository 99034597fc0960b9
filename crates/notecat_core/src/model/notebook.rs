//! Notebook record model.
//!
//! # Responsibility
//! - Define the wire shape of one catalog entry.
//! - Validate records at load time so the rest of core can trust them.
//!
//! # Invariants
//! - `name` is non-blank and acts as the resolution key.
//! - `profiles` is never empty on a loaded record.
//! - Attribute fields stay `Option` so absent source values can render as
//!   an explicit placeholder instead of an empty string.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One catalog entry.
///
/// Field names are English; `rename` attributes map to the catalog
/// document's original Portuguese keys. Any attribute may be missing in the
/// source document, in which case comparison cells show a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookRecord {
    /// Unique display name, used as the identifier throughout core.
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "imagem", default)]
    pub image: Option<String>,
    #[serde(rename = "processador", default)]
    pub processor: Option<String>,
    #[serde(rename = "ram", default)]
    pub memory: Option<String>,
    #[serde(rename = "ssd", default)]
    pub storage: Option<String>,
    #[serde(rename = "tela", default)]
    pub display: Option<String>,
    #[serde(rename = "gpu", default)]
    pub graphics: Option<String>,
    #[serde(rename = "sistema_operacional", default)]
    pub operating_system: Option<String>,
    /// Selling points, in document order.
    #[serde(rename = "positivos", default)]
    pub positives: Option<Vec<String>>,
    /// Drawbacks, in document order.
    #[serde(rename = "negativos", default)]
    pub negatives: Option<Vec<String>>,
    /// Suitable use-case tags. Must be non-empty after load.
    #[serde(rename = "perfil")]
    pub profiles: Vec<String>,
}

/// Load-time validation failure for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// `name` is empty or whitespace-only.
    BlankName,
    /// `profiles` contains no tags; such a record could never be filtered to.
    EmptyProfileSet { name: String },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "record has a blank name"),
            Self::EmptyProfileSet { name } => {
                write!(f, "record `{name}` has an empty profile set")
            }
        }
    }
}

impl Error for RecordValidationError {}

impl NotebookRecord {
    /// Checks the invariants a loaded record must satisfy.
    ///
    /// Called by the catalog loader on every record; a single failure
    /// rejects the whole document (load is all-or-nothing).
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::BlankName);
        }
        if self.profiles.is_empty() {
            return Err(RecordValidationError::EmptyProfileSet {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Exact-equality membership test for one profile tag.
    pub fn has_profile(&self, tag: &str) -> bool {
        self.profiles.iter().any(|profile| profile == tag)
    }
}
