use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::data::columns::RoleTable;
use crate::data::loader;
use crate::data::model::PriceCatalog;
use crate::data::search::find_text;
use crate::export::export_html;

// ---------------------------------------------------------------------------
// Interactive session
// ---------------------------------------------------------------------------

/// One interactive run: a role table, the record store it fills, and the
/// default export target. The catalog is owned exclusively by the session.
pub struct Session {
    roles: RoleTable,
    catalog: PriceCatalog,
    default_output: PathBuf,
    loaded: bool,
}

impl Session {
    pub fn new(roles: RoleTable, default_output: PathBuf) -> Self {
        Session {
            roles,
            catalog: PriceCatalog::default(),
            default_output,
            loaded: false,
        }
    }

    /// Load a catalog directory into the store.
    ///
    /// Never fatal: a missing directory is logged and the session continues
    /// with whatever is already loaded (possibly an empty store).
    pub fn load(&mut self, dir: &Path) {
        self.loaded = true;
        if let Err(e) = loader::load_dir(dir, &self.roles, &mut self.catalog) {
            log::error!("{e}");
        }
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// Drive the interactive loop over the given handles: an optional
    /// directory prompt, repeated search prompts until `exit`, then the
    /// export handshake. End of input behaves like `exit`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        if !self.loaded {
            match prompt(&mut input, &mut out, "Enter the path to the price-list directory: ")? {
                Some(dir) => self.load(Path::new(dir.trim())),
                None => return Ok(()),
            }
        }

        loop {
            let line = prompt(
                &mut input,
                &mut out,
                "\nEnter a product name fragment to search (or 'exit' to quit): ",
            )?;
            let Some(line) = line else { break };
            let fragment = line.trim();
            if fragment.eq_ignore_ascii_case("exit") {
                break;
            }

            let matches = find_text(&self.catalog, fragment);
            if matches.is_empty() {
                writeln!(out, "No matching products.")?;
                continue;
            }
            for (index, rec) in matches.iter().enumerate() {
                writeln!(
                    out,
                    "{}. {} - Price: {:.2}, Weight: {:.2}, File: {}, Price-per-kg: {:.2}",
                    index + 1,
                    rec.product,
                    rec.price,
                    rec.weight,
                    rec.source_file,
                    rec.unit_price,
                )?;
            }
        }

        self.export_handshake(&mut input, &mut out)
    }

    /// Y/N prompt after the search loop; Y exports, N closes, anything else
    /// does nothing further.
    fn export_handshake<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        let answer = match prompt(input, out, "\nSave the catalog to HTML? (Y/N): ")? {
            Some(answer) => answer,
            None => return Ok(()),
        };
        let answer = answer.trim();

        if answer.eq_ignore_ascii_case("y") {
            let name = prompt(input, out, "Output file name: ")?.unwrap_or_default();
            let name = name.trim();
            let target = if name.is_empty() {
                self.default_output.clone()
            } else {
                PathBuf::from(name)
            };
            match export_html(&self.catalog, &target) {
                Ok(()) => writeln!(
                    out,
                    "Saved {} records to {}",
                    self.catalog.len(),
                    target.display()
                )?,
                Err(e) => log::error!("{e}"),
            }
        } else if answer.eq_ignore_ascii_case("n") {
            writeln!(out, "Done.")?;
        }
        Ok(())
    }
}

/// Print `text` without a trailing newline, flush, and read one input line.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
