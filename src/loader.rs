// 📥 Dataset Loader - CSV → TripTable
//
// Pipeline: resolve path → read CSV → parse start times → derive month and
// weekday → filter → normalize column names.

use crate::filters::{City, FilterSpec};
use crate::registry::DatasetRegistry;
use crate::table::{normalize_column, TripRecord, TripTable};
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use log::{debug, info};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Accepted start-time layouts, tried in order
const START_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const START_TIME_COLUMN: &str = "start_time";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No trip data for {city} at {}", .path.display())]
    DatasetNotFound {
        city: City,
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("{} has no 'Start Time' column", .path.display())]
    MissingColumn { path: PathBuf },

    #[error("Unparseable start time '{value}' on line {line} of {}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("Failed to read CSV {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// ============================================================================
// LOADING
// ============================================================================

/// Load the trips for `spec.city` and apply the month/day filters
///
/// A single unparseable start time aborts the whole load.
pub fn load(registry: &DatasetRegistry, spec: &FilterSpec) -> Result<TripTable, LoadError> {
    let path = registry
        .path(spec.city)
        .ok_or_else(|| LoadError::DatasetNotFound {
            city: spec.city,
            path: registry.base_dir().to_path_buf(),
            source: None,
        })?;

    let table = read_trips(spec.city, path)?;
    let loaded = table.len();

    let table = table.filter(spec).with_normalized_columns();
    info!(
        "{}: kept {} of {} trips (month: {}, day: {})",
        spec.city,
        table.len(),
        loaded,
        spec.month,
        spec.day
    );

    Ok(table)
}

/// Read every trip in the file, unfiltered, with source column names
fn read_trips(city: City, path: &Path) -> Result<TripTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::DatasetNotFound {
        city,
        path: path.to_path_buf(),
        source: Some(e),
    })?;
    debug!("Reading {}", path.display());

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let to_load_error = |source: csv::Error| read_error(city, path, source);

    let headers: Vec<String> = reader
        .headers()
        .map_err(to_load_error)?
        .iter()
        .enumerate()
        .map(|(i, h)| column_name(i, h))
        .collect();

    let start_col = headers
        .iter()
        .position(|h| normalize_column(h) == START_TIME_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
        })?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(to_load_error)?;
        // +2 because: 1-indexed + header row
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        let raw = record.get(start_col).unwrap_or("");
        let start_time = parse_start_time(raw).ok_or_else(|| LoadError::MalformedRecord {
            path: path.to_path_buf(),
            line,
            value: raw.to_string(),
        })?;

        records.push(TripRecord::new(
            index,
            start_time,
            record.iter().map(str::to_string).collect(),
        ));
    }

    debug!("Read {} trips from {}", records.len(), path.display());
    Ok(TripTable::new(headers, start_col, records))
}

/// I/O failures mean the dataset cannot be read at all; anything else is bad CSV
fn read_error(city: City, path: &Path, source: csv::Error) -> LoadError {
    if !source.is_io_error() {
        return LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };
    }

    let io = match source.into_kind() {
        csv::ErrorKind::Io(e) => Some(e),
        _ => None,
    };
    LoadError::DatasetNotFound {
        city,
        path: path.to_path_buf(),
        source: io,
    }
}

/// Blank headers (the leading index column) become "Unnamed: <position>"
fn column_name(position: usize, header: &str) -> String {
    if header.trim().is_empty() {
        format!("Unnamed: {}", position)
    } else {
        header.to_string()
    }
}

/// Parse a start-time cell in any of the accepted layouts
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

// ============================================================================
// TESTS
// ============================================================================
