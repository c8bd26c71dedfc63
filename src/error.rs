use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failures surfaced while loading a catalog or exporting it.
///
/// Per-file variants (`FileOpen`, `Parse`, `ColumnResolution`) are logged and
/// the directory scan continues with the next file; `DirectoryNotFound`
/// aborts the whole load step. `ExportWrite` is logged and the session keeps
/// running. Nothing here terminates the process.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog path is not a directory: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("failed to open '{file}': {source}")]
    FileOpen {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{file}': {source}")]
    Parse {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("'{file}': headers {headers:?} resolve no product or no price column")]
    ColumnResolution { file: String, headers: Vec<String> },

    #[error("failed to write '{path}': {source}")]
    ExportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
