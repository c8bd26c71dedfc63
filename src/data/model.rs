// ---------------------------------------------------------------------------
// Record – one normalized price-list row
// ---------------------------------------------------------------------------

/// A single normalized row from a price-list file.
///
/// Immutable once constructed; the derived `unit_price` is computed in
/// [`Record::new`] and never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Product name as it appeared in the file.
    pub product: String,
    /// Retail price.
    pub price: f64,
    /// Pack weight in kilograms; files without a weight column get 1.0.
    pub weight: f64,
    /// Name of the file this row came from.
    pub source_file: String,
    /// Price per kilogram: `price / weight`, or 0.0 when weight is 0.
    pub unit_price: f64,
}

impl Record {
    /// Build a record, deriving the unit price.
    pub fn new(product: String, price: f64, weight: f64, source_file: String) -> Self {
        let unit_price = if weight > 0.0 { price / weight } else { 0.0 };
        Record {
            product,
            price,
            weight,
            source_file,
            unit_price,
        }
    }
}

// ---------------------------------------------------------------------------
// PriceCatalog – the full in-memory record store
// ---------------------------------------------------------------------------

/// Append-only store of every record parsed across all loaded files.
///
/// Rows keep their load order (file-listing order, then row order);
/// duplicates across files are retained, not merged.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    records: Vec<Record>,
}

impl PriceCatalog {
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// All records sorted ascending by unit price (stable: ties keep load
    /// order). This is the export ordering.
    pub fn sorted_by_unit_price(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
        sorted
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
