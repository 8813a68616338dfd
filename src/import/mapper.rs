//! Header-driven row mapper.
//!
//! Takes a dense row grid whose first row is a header, resolves each schema
//! field to a column through its synonym set, then walks the data rows:
//! spacer rows are skipped, invalid rows are rejected with a per-row message,
//! and valid rows become typed records. Rejections accumulate; a bad row
//! never aborts the rest of the file.

use crate::error::ImportError;
use crate::error::REJECTION_REPORT_LIMIT;
use crate::import::schema::Schema;
use crate::import::Import;
use crate::import::ImportRecord;
use std::collections::HashMap;

/// A validated field value handed to record construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    /// Blank cell, unresolved column, or unparseable numeric text.
    #[default]
    Missing,
    /// Trimmed cell text.
    Text(String),
    /// Parsed and bounds-checked numeric value.
    Number(f64),
}

impl FieldValue {
    /// Takes the text out of the value, leaving `Missing` behind.
    pub fn take_text(&mut self) -> Option<String> {
        match std::mem::take(self) {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Takes the number out of the value, leaving `Missing` behind.
    pub fn take_number(&mut self) -> Option<f64> {
        match std::mem::take(self) {
            FieldValue::Number(number) => Some(number),
            _ => None,
        }
    }
}

/// Maps a grid into typed records plus accumulated rejections.
///
/// Fails the whole import when the grid has no data rows, when any required
/// column cannot be resolved (every missing column is named), or when every
/// data row was rejected (carrying the first rejection messages, capped).
pub(crate) fn map_grid<T: ImportRecord>(grid: &[Vec<String>]) -> Result<Import<T>, ImportError> {
    let schema = T::schema();
    if grid.len() < 2 {
        return Err(ImportError::EmptyInput);
    }

    let columns = resolve_columns(schema, &grid[0])?;
    let key_label = schema.key_field().map(|field| field.label);

    let mut records = Vec::<T>::new();
    let mut rejections = Vec::<String>::new();
    for (offset, row) in grid.iter().enumerate().skip(1) {
        // 1-based numbering counting the header as row 1, so the message
        // matches what the operator sees in their spreadsheet program.
        let row_number = offset + 1;
        let cell = |column: &Option<usize>| {
            column
                .and_then(|index| row.get(index))
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let is_spacer = schema
            .fields
            .iter()
            .zip(&columns)
            .filter(|(field, _)| field.identity)
            .all(|(_, column)| cell(column).is_none());
        if is_spacer {
            continue;
        }

        let mut values = Vec::with_capacity(schema.fields.len());
        let mut key = None::<&str>;
        let mut rejected = false;
        for (field, column) in schema.fields.iter().zip(&columns) {
            let text = cell(column);
            if field.required && text.is_none() {
                rejections.push(match key.zip(key_label) {
                    Some((key, label)) => {
                        format!("Row {row_number}: Missing {} for {label}: {key}", field.label)
                    }
                    None => format!("Row {row_number}: Missing {}", field.label),
                });
                rejected = true;
                break;
            }
            if field.identity && key.is_none() {
                key = text;
            }
            let value = match (text, field.bounds) {
                (None, _) => FieldValue::Missing,
                (Some(text), None) => FieldValue::Text(text.to_owned()),
                (Some(text), Some((lower, upper))) => match text.parse::<f64>() {
                    Ok(number) if lower <= number && number <= upper => FieldValue::Number(number),
                    Ok(_) => {
                        rejections.push(match key.zip(key_label) {
                            Some((key, label)) => format!(
                                "Row {row_number}: {} must be between {lower} and {upper} for {label}: {key}",
                                field.label,
                            ),
                            None => format!(
                                "Row {row_number}: {} must be between {lower} and {upper}",
                                field.label,
                            ),
                        });
                        rejected = true;
                        break;
                    }
                    // Non-numeric score text is treated as absent, not fatal.
                    Err(_) => FieldValue::Missing,
                },
            };
            values.push(value);
        }
        if !rejected {
            records.push(T::from_values(&mut values));
        }
    }

    log::debug!(
        "Imported {} {} rows, {} rejected",
        records.len(),
        schema.entity,
        rejections.len(),
    );
    if records.is_empty() && !rejections.is_empty() {
        rejections.truncate(REJECTION_REPORT_LIMIT);
        return Err(ImportError::NoRowsAccepted(rejections));
    }
    Ok(Import {
        records,
        rejections,
    })
}

/// Resolves every schema field against the header row, case-insensitively and
/// in synonym-priority order. All missing required fields are reported
/// together so the operator fixes the file once.
fn resolve_columns(schema: &Schema, header: &[String]) -> Result<Vec<Option<usize>>, ImportError> {
    let mut header_map = HashMap::<String, usize>::new();
    for (index, value) in header.iter().enumerate() {
        let name = value.trim().to_lowercase();
        if !name.is_empty() {
            header_map.insert(name, index);
        }
    }
    log::debug!("Header columns: {:?}", header_map.keys().collect::<Vec<_>>());

    let columns: Vec<Option<usize>> = schema
        .fields
        .iter()
        .map(|field| {
            field
                .synonyms
                .iter()
                .find_map(|synonym| header_map.get(*synonym).copied())
        })
        .collect();

    let missing: Vec<String> = schema
        .fields
        .iter()
        .zip(&columns)
        .filter(|(field, column)| field.required && column.is_none())
        .map(|(field, _)| field.label.to_owned())
        .collect();
    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(ImportError::MissingRequiredColumns(missing))
    }
}
