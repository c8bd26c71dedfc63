/// Data layer: core types, loading, column resolution, and search.
///
/// Architecture:
/// ```text
///  price*.csv files
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  scan directory → parse rows
///   └──────────┘
///        │  per-file header resolution (columns)
///        ▼
///   ┌──────────────┐
///   │ PriceCatalog  │  Vec<Record>, unit price per row
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  search   │  substring match → ascending by unit price
///   └──────────┘
/// ```

pub mod columns;
pub mod loader;
pub mod model;
pub mod search;
