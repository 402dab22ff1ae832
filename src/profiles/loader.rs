use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use super::LoadError;
use super::record::Field;

const BOM: char = '\u{feff}';

/// Reads a comma-delimited roster into header-keyed rows, in file order.
pub fn read_rows(path: &Path) -> Result<Vec<HashMap<String, String>>, LoadError> {
    let file = std::fs::File::open(path)?;
    let rows = parse_rows(file)?;
    debug!(path = %path.display(), rows = rows.len(), "roster file read");
    Ok(rows)
}

/// Same as [`read_rows`] over any reader.
pub fn parse_rows<R: Read>(input: R) -> Result<Vec<HashMap<String, String>>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = normalize_headers(reader.headers()?);
    if let Some(missing) = Field::ALL
        .into_iter()
        .find(|field| !headers.iter().any(|header| header == field.column()))
    {
        return Err(LoadError::MissingColumn(missing.column().to_string()));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        // Short rows simply lack their trailing keys.
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect::<HashMap<_, _>>();
        rows.push(row);
    }

    Ok(rows)
}

/// Base name of the roster file without directory or extension.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if index == 0 {
                header.trim_start_matches(BOM).to_string()
            } else {
                header.to_string()
            }
        })
        .collect()
}
