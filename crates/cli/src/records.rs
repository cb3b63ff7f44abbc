// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CSV record store.
//!
//! Records are `(id, value)` pairs stored one per row under a header row.
//! Columns are located by header name, so extra columns are ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::config::DataConfig;

/// A stored text record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: Uuid,
    pub value: String,
}

impl Record {
    pub fn new(id: Uuid, value: impl Into<String>) -> Self {
        Self { id, value: value.into() }
    }
}

/// Header names of the id and value columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id_column: String,
    pub value_column: String,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::from(&DataConfig::default())
    }
}

impl From<&DataConfig> for ColumnLayout {
    fn from(config: &DataConfig) -> Self {
        Self { id_column: config.id_column.clone(), value_column: config.value_column.clone() }
    }
}

/// Errors raised while reading or writing records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create directory for {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: missing column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}:{line}: invalid id `{value}`: {source}", path.display())]
    InvalidId {
        path: PathBuf,
        line: u64,
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Read every record from the CSV file at `path`.
pub fn read_records(path: &Path, layout: &ColumnLayout) -> Result<Vec<Record>, RecordError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|source| RecordError::Open { path: path.to_path_buf(), source })?;

    let headers =
        reader.headers().map_err(|source| RecordError::Csv { path: path.to_path_buf(), source })?;
    let id_index = column_index(headers, &layout.id_column, path)?;
    let value_index = column_index(headers, &layout.value_column, path)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| RecordError::Csv { path: path.to_path_buf(), source })?;
        let line = row.position().map_or(0, |p| p.line());

        let raw_id = row.get(id_index).unwrap_or_default();
        let id = Uuid::parse_str(raw_id).map_err(|source| RecordError::InvalidId {
            path: path.to_path_buf(),
            line,
            value: raw_id.to_string(),
            source,
        })?;
        let value = row.get(value_index).unwrap_or_default();

        records.push(Record::new(id, value));
    }

    tracing::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write `records` to `path`, replacing any existing file.
///
/// Parent directories are created if needed.
pub fn write_records(
    path: &Path,
    layout: &ColumnLayout,
    records: &[Record],
) -> Result<(), RecordError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| RecordError::CreateDir { path: path.to_path_buf(), source })?;
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|source| RecordError::Open { path: path.to_path_buf(), source })?;
    let csv_err = |source: csv::Error| RecordError::Csv { path: path.to_path_buf(), source };

    writer.write_record([&layout.id_column, &layout.value_column]).map_err(csv_err)?;
    for record in records {
        writer
            .write_record([record.id.to_string().as_str(), record.value.as_str()])
            .map_err(csv_err)?;
    }
    writer
        .flush()
        .map_err(|source| RecordError::Csv { path: path.to_path_buf(), source: source.into() })?;

    tracing::debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, RecordError> {
    headers.iter().position(|h| h == column).ok_or_else(|| RecordError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    })
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
