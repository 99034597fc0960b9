//! Comparison table derivation.
//!
//! # Responsibility
//! - Project resolved comparison records into a pure table model.
//!
//! # Invariants
//! - The characteristic row set and order are fixed, not user-configurable.
//! - Columns follow resolution order; headers are record names.
//! - Absent values render the literal `N/A`; list values join with `", "`.

use crate::model::notebook::NotebookRecord;
use serde::Serialize;

/// Placeholder for characteristics absent on a record.
pub const MISSING_VALUE: &str = "N/A";

/// Delimiter for list-valued characteristic cells.
const LIST_DELIMITER: &str = ", ";

/// One characteristic row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Characteristic label shown in the leading column.
    pub label: String,
    /// One cell per compared record, in column order.
    pub cells: Vec<String>,
}

/// Pure comparison table model.
///
/// Serializable so surfaces that want a JSON payload (a webview, a test
/// harness) can take it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel {
    /// Record names, one per column, in resolution order.
    pub headers: Vec<String>,
    /// Fixed characteristic rows; every row has one cell per header.
    pub rows: Vec<TableRow>,
}

enum Characteristic {
    Scalar(&'static str, fn(&NotebookRecord) -> Option<&String>),
    List(&'static str, fn(&NotebookRecord) -> Option<&Vec<String>>),
}

const CHARACTERISTICS: [Characteristic; 10] = [
    Characteristic::Scalar("Description", |nb| nb.description.as_ref()),
    Characteristic::Scalar("Processor", |nb| nb.processor.as_ref()),
    Characteristic::Scalar("Memory", |nb| nb.memory.as_ref()),
    Characteristic::Scalar("Storage", |nb| nb.storage.as_ref()),
    Characteristic::Scalar("Display", |nb| nb.display.as_ref()),
    Characteristic::Scalar("Graphics", |nb| nb.graphics.as_ref()),
    Characteristic::Scalar("Operating System", |nb| nb.operating_system.as_ref()),
    Characteristic::List("Positive Points", |nb| nb.positives.as_ref()),
    Characteristic::List("Negative Points", |nb| nb.negatives.as_ref()),
    Characteristic::List("Profiles", |nb| Some(&nb.profiles)),
];

/// Derives the comparison table for the given records.
///
/// Pure: the same records always produce the same model.
pub fn build_table(records: &[&NotebookRecord]) -> TableModel {
    let headers = records.iter().map(|nb| nb.name.clone()).collect();
    let rows = CHARACTERISTICS
        .iter()
        .map(|characteristic| match characteristic {
            Characteristic::Scalar(label, value_of) => TableRow {
                label: (*label).to_string(),
                cells: records
                    .iter()
                    .map(|nb| {
                        value_of(nb)
                            .cloned()
                            .unwrap_or_else(|| MISSING_VALUE.to_string())
                    })
                    .collect(),
            },
            Characteristic::List(label, values_of) => TableRow {
                label: (*label).to_string(),
                cells: records
                    .iter()
                    .map(|nb| match values_of(nb) {
                        Some(values) => values.join(LIST_DELIMITER),
                        None => MISSING_VALUE.to_string(),
                    })
                    .collect(),
            },
        })
        .collect();

    TableModel { headers, rows }
}
