use std::fs::File;
use std::path::Path;

use anyhow::Context;

use super::columns::{ColumnMap, RoleTable};
use super::model::{PriceCatalog, Record};
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Outcome of one directory scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Files parsed successfully.
    pub files: usize,
    /// Records appended to the catalog.
    pub records: usize,
    /// Files skipped on a per-file failure.
    pub skipped: usize,
}

/// Scan `dir` for price-list CSV files and append their rows to `catalog`.
///
/// A file participates when its lowercased name contains `"price"` and its
/// extension is `.csv`; the scan is non-recursive and visits files in name
/// order. Per-file failures (open, malformed CSV, unresolvable columns) are
/// logged and skipped; only a missing directory aborts the whole load.
pub fn load_dir(
    dir: &Path,
    roles: &RoleTable,
    catalog: &mut PriceCatalog,
) -> Result<LoadReport, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut names: Vec<String> = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("listing directory {}", dir.display()))?;
    for entry in entries {
        let entry =
            entry.with_context(|| format!("listing directory {}", dir.display()))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_price_list(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut report = LoadReport::default();
    for name in &names {
        match load_file(&dir.join(name), name, roles, catalog) {
            Ok(count) => {
                log::debug!("{name}: {count} records");
                report.files += 1;
                report.records += count;
            }
            Err(e) => {
                log::warn!("skipping {name}: {e}");
                report.skipped += 1;
            }
        }
    }

    log::info!(
        "loaded {} records from {} files in {} ({} skipped)",
        report.records,
        report.files,
        dir.display(),
        report.skipped,
    );
    Ok(report)
}

/// Whether a file name looks like a price list: lowercased name contains
/// `"price"` and the extension is `.csv`.
fn is_price_list(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("price") && lower.ends_with(".csv")
}

// ---------------------------------------------------------------------------
// Per-file parsing
// ---------------------------------------------------------------------------

/// Parse one price-list file and append its rows. Returns the record count.
fn load_file(
    path: &Path,
    file_name: &str,
    roles: &RoleTable,
    catalog: &mut PriceCatalog,
) -> Result<usize, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::FileOpen {
        file: file_name.to_string(),
        source,
    })?;

    // Rows may be shorter than the header; missing cells fall back to
    // defaults below, so let the parser accept ragged rows.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| CatalogError::Parse {
            file: file_name.to_string(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let cols = roles
        .resolve(&headers)
        .ok_or_else(|| CatalogError::ColumnResolution {
            file: file_name.to_string(),
            headers,
        })?;

    let mut count = 0;
    for result in reader.records() {
        let row = result.map_err(|source| CatalogError::Parse {
            file: file_name.to_string(),
            source,
        })?;
        catalog.push(row_to_record(&row, cols, file_name));
        count += 1;
    }
    Ok(count)
}

/// Normalize one data row against the file's column map.
fn row_to_record(row: &csv::StringRecord, cols: ColumnMap, file_name: &str) -> Record {
    let product = cell(row, cols.product).unwrap_or("").to_string();
    let price = parse_decimal(cell(row, cols.price), 0.0);
    let weight = parse_decimal(cell(row, cols.weight), 1.0);
    Record::new(product, price, weight, file_name.to_string())
}

fn cell<'a>(row: &'a csv::StringRecord, index: Option<usize>) -> Option<&'a str> {
    index.and_then(|i| row.get(i))
}

/// Parse a numeric cell, falling back to `default` when the cell is absent,
/// empty, or unparsable. A bad cell never fails its row.
fn parse_decimal(cell: Option<&str>, default: f64) -> f64 {
    match cell.map(str::trim) {
        None | Some("") => default,
        Some(text) => text.parse().unwrap_or(default),
    }
}
