use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// RoleTable – header synonyms per semantic role
// ---------------------------------------------------------------------------

/// The synonym sets that assign a semantic role to a CSV header.
///
/// Kept as configuration data rather than code: the default table is the
/// embedded `roles.json`, and a custom table can be loaded from a file with
/// the same shape. Entries are matched against lowercased headers, so they
/// should be lowercase themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleTable {
    pub product: Vec<String>,
    pub price: Vec<String>,
    pub weight: Vec<String>,
}

/// Built-in synonym table for the source-language price lists.
const DEFAULT_ROLES: &str = include_str!("roles.json");

impl Default for RoleTable {
    fn default() -> Self {
        // Embedded at compile time; a parse failure is a build defect.
        serde_json::from_str(DEFAULT_ROLES).expect("embedded roles.json is valid")
    }
}

impl RoleTable {
    /// Load a custom synonym table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading role table {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing role table {}", path.display()))
    }

    /// Scan a header row once and assign a column index to each role.
    ///
    /// Later matches overwrite earlier ones: the scan never stops early, so
    /// a header row with two price-like columns resolves to the last. Returns
    /// `None` when no product or no price column was found after the full
    /// scan; weight stays optional.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> Option<ColumnMap> {
        let mut map = ColumnMap::default();
        for (index, header) in headers.iter().enumerate() {
            let header = header.as_ref().trim().to_lowercase();
            if self.product.iter().any(|s| *s == header) {
                map.product = Some(index);
            } else if self.price.iter().any(|s| *s == header) {
                map.price = Some(index);
            } else if self.weight.iter().any(|s| *s == header) {
                map.weight = Some(index);
            }
        }
        if map.product.is_none() || map.price.is_none() {
            return None;
        }
        Some(map)
    }
}

// ---------------------------------------------------------------------------
// ColumnMap – resolved indices for one file
// ---------------------------------------------------------------------------

/// Column indices for one file's header row, per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub product: Option<usize>,
    pub price: Option<usize>,
    pub weight: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_all_three_roles() {
        let table = RoleTable::default();
        let map = table
            .resolve(&headers(&["Название", "Цена", "Вес"]))
            .unwrap();
        assert_eq!(map.product, Some(0));
        assert_eq!(map.price, Some(1));
        assert_eq!(map.weight, Some(2));
    }

    #[test]
    fn weight_is_optional() {
        let table = RoleTable::default();
        let map = table.resolve(&headers(&["Товар", "Розница"])).unwrap();
        assert_eq!(map.product, Some(0));
        assert_eq!(map.price, Some(1));
        assert_eq!(map.weight, None);
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let table = RoleTable::default();
        let map = table.resolve(&headers(&["НАЗВАНИЕ", "ЦЕНА"])).unwrap();
        assert_eq!(map.product, Some(0));
        assert_eq!(map.price, Some(1));
    }

    #[test]
    fn last_match_wins_on_duplicate_roles() {
        let table = RoleTable::default();
        let map = table
            .resolve(&headers(&["Цена", "Название", "Розница"]))
            .unwrap();
        // Both "Цена" and "Розница" are price synonyms; the later index wins.
        assert_eq!(map.price, Some(2));
    }

    #[test]
    fn fails_without_product_column() {
        let table = RoleTable::default();
        assert!(table.resolve(&headers(&["Цена", "Вес"])).is_none());
    }

    #[test]
    fn fails_without_price_column() {
        let table = RoleTable::default();
        assert!(table.resolve(&headers(&["Название", "Вес"])).is_none());
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let table = RoleTable::default();
        let map = table
            .resolve(&headers(&["Артикул", "Название", "Цена", "Остаток"]))
            .unwrap();
        assert_eq!(map.product, Some(1));
        assert_eq!(map.price, Some(2));
        assert_eq!(map.weight, None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let table = RoleTable::default();
        let hs = headers(&["Продукт", "Цена", "Масса", "Цена"]);
        assert_eq!(table.resolve(&hs), table.resolve(&hs));
    }
}
