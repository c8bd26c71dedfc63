use std::fmt::Write as _;
use std::path::Path;

use crate::data::model::PriceCatalog;
use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// HTML export
// ---------------------------------------------------------------------------

/// Render every record in the catalog — not just the last search result —
/// as a static HTML table, sorted ascending by unit price.
///
/// The document is written to a sibling temp file and renamed over the
/// target; a failed write leaves no truncated export behind. An existing
/// target is overwritten.
pub fn export_html(catalog: &PriceCatalog, path: &Path) -> Result<(), CatalogError> {
    let html = render(catalog);

    let tmp = path.with_extension("html.tmp");
    let write_err = |source| CatalogError::ExportWrite {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(&tmp, html).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;
    log::info!("exported {} records to {}", catalog.len(), path.display());
    Ok(())
}

/// Build the full HTML document in memory.
fn render(catalog: &PriceCatalog) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Price list</title>\n\
         </head>\n\
         <body>\n\
         <table>\n\
         <tr>\n\
         <th>Number</th>\n\
         <th>Name</th>\n\
         <th>Price</th>\n\
         <th>Pack/Weight</th>\n\
         <th>File</th>\n\
         <th>Price-per-kg</th>\n\
         </tr>\n",
    );

    for (index, rec) in catalog.sorted_by_unit_price().iter().enumerate() {
        // Infallible: fmt::Write on String never errors.
        let _ = write!(
            out,
            "<tr>\n\
             <td>{}</td>\n\
             <td>{}</td>\n\
             <td>{:.2}</td>\n\
             <td>{:.2}</td>\n\
             <td>{}</td>\n\
             <td>{:.2}</td>\n\
             </tr>\n",
            index + 1,
            escape_html(&rec.product),
            rec.price,
            rec.weight,
            escape_html(&rec.source_file),
            rec.unit_price,
        );
    }

    out.push_str("</table>\n</body>\n</html>\n");
    out
}

/// Escape the characters that would break table cells.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
