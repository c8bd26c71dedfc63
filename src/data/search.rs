use super::model::{PriceCatalog, Record};

// ---------------------------------------------------------------------------
// Substring search over product names
// ---------------------------------------------------------------------------

/// Case-insensitive substring search over product names.
///
/// No tokenization, no fuzzy matching: a record matches when its lowercased
/// product name contains the lowercased fragment. The empty fragment matches
/// every record. Matches come back sorted ascending by unit price; records
/// with equal unit price keep their store order (stable sort).
pub fn find_text<'a>(catalog: &'a PriceCatalog, fragment: &str) -> Vec<&'a Record> {
    let needle = fragment.to_lowercase();
    let mut matches: Vec<&Record> = catalog
        .records()
        .iter()
        .filter(|rec| rec.product.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
    matches
}
