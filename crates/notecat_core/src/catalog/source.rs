//! Catalog document parsing.
//!
//! # Responsibility
//! - Turn a catalog JSON document into validated `NotebookRecord`s.
//! - Emit `catalog_load` logging events with duration and status.
//!
//! # Invariants
//! - Load is all-or-nothing: one malformed or invalid record rejects the
//!   whole document.
//! - Returned records preserve document order.

use super::LoadResult;
use crate::model::notebook::NotebookRecord;
use log::{error, info};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Parses a catalog document from an in-memory string.
pub fn load_catalog_from_str(document: &str) -> LoadResult<Vec<NotebookRecord>> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=str");
    finish_load(started_at, "str", parse_document(document))
}

/// Parses a catalog document from any reader.
pub fn load_catalog_from_reader(reader: impl Read) -> LoadResult<Vec<NotebookRecord>> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=reader");
    let result = (|| {
        let mut document = String::new();
        let mut reader = reader;
        reader.read_to_string(&mut document)?;
        parse_document(&document)
    })();
    finish_load(started_at, "reader", result)
}

/// Reads and parses a catalog document from a file path.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> LoadResult<Vec<NotebookRecord>> {
    let started_at = Instant::now();
    info!("event=catalog_load module=catalog status=start mode=file");
    let result = (|| {
        let document = std::fs::read_to_string(path)?;
        parse_document(&document)
    })();
    finish_load(started_at, "file", result)
}

fn parse_document(document: &str) -> LoadResult<Vec<NotebookRecord>> {
    let records: Vec<NotebookRecord> = serde_json::from_str(document)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

fn finish_load(
    started_at: Instant,
    mode: &str,
    result: LoadResult<Vec<NotebookRecord>>,
) -> LoadResult<Vec<NotebookRecord>> {
    match &result {
        Ok(records) => {
            info!(
                "event=catalog_load module=catalog status=ok mode={} duration_ms={} records={}",
                mode,
                started_at.elapsed().as_millis(),
                records.len()
            );
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error mode={} duration_ms={} error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
        }
    }
    result
}
