/// CSV loading for tabular training and test data.
///
/// Supported format:
/// - UTF-8, comma-separated
/// - Optional header row (skipped unconditionally when `has_header` is set)
/// - Double-quoted fields with embedded commas are handled correctly
/// - Each data record holds exactly `input_neurons + output_neurons` numeric
///   fields: feature columns first, then the one-hot label columns

use std::path::{Path, PathBuf};

use tracing::info;

use crate::data::dataset::{DataProvider, Dataset};
use crate::errors::{NetworkError, Result};
use crate::math::matrix::Matrix;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvParseError(pub String);

impl std::fmt::Display for CsvParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for CsvParseError {}

/// Loads a `Dataset` from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvDataProvider {
    pub path: PathBuf,
    pub input_neurons: usize,
    pub output_neurons: usize,
    pub has_header: bool,
}

impl CsvDataProvider {
    /// Provider for a file with a header row.
    pub fn new(path: impl AsRef<Path>, input_neurons: usize, output_neurons: usize) -> Self {
        CsvDataProvider {
            path: path.as_ref().to_path_buf(),
            input_neurons,
            output_neurons,
            has_header: true,
        }
    }
}

impl DataProvider for CsvDataProvider {
    fn load(&self) -> Result<Dataset> {
        let shown = self.path.display().to_string();
        let text = std::fs::read_to_string(&self.path).map_err(|e| NetworkError::DataLoad {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        let (features, labels) = parse_csv(&text, self.input_neurons, self.output_neurons, self.has_header)
            .map_err(|e| NetworkError::DataLoad {
                path: shown.clone(),
                message: e.0,
            })?;

        info!(path = %shown, rows = features.len(), "loaded dataset");
        Dataset::new(Matrix::from_data(features), Matrix::from_data(labels))
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV text into (features, labels).
///
/// # Arguments
/// - `text`           — raw CSV text
/// - `input_neurons`  — number of leading feature columns
/// - `output_neurons` — number of trailing label columns
/// - `has_header`     — skip the first non-blank line
///
/// # Returns
/// `(features, labels)` where each is a `Vec<Vec<f64>>` of equal length.
pub fn parse_csv(
    text: &str,
    input_neurons: usize,
    output_neurons: usize,
    has_header: bool,
) -> std::result::Result<(Vec<Vec<f64>>, Vec<Vec<f64>>), CsvParseError> {
    let n_fields = input_neurons + output_neurons;

    let mut features: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<Vec<f64>> = Vec::new();
    let mut header_pending = has_header;

    for (line_idx, line) in text.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            continue;
        }

        let cells = parse_csv_row(line);
        if cells.len() != n_fields {
            return Err(CsvParseError(format!(
                "Line {}: expected {} fields, got {}",
                line_num,
                n_fields,
                cells.len()
            )));
        }

        let (feature_cells, label_cells) = cells.split_at(input_neurons);
        features.push(parse_floats(feature_cells, line_num)?);
        labels.push(parse_floats(label_cells, line_num)?);
    }

    if features.is_empty() {
        return Err(CsvParseError("CSV contains no data rows after parsing".into()));
    }

    Ok((features, labels))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses a slice of string cells as `f64`, returning an error with line info on failure.
fn parse_floats(cells: &[String], line_num: usize) -> std::result::Result<Vec<f64>, CsvParseError> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| {
                CsvParseError(format!(
                    "Line {}: '{}' is not a valid number",
                    line_num, c
                ))
            })
        })
        .collect()
}
