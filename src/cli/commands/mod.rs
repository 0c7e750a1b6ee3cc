//! CLI command implementations

pub mod bores;
pub mod check;
pub mod completions;
pub mod list;
pub mod select;
pub mod show;

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::{loader, Catalog};

pub(crate) fn catalog_path(global: &GlobalOpts) -> Result<PathBuf> {
    global.catalog.clone().ok_or_else(|| {
        miette::miette!("no catalog file given; pass --catalog <FILE> or set HST_CATALOG")
    })
}

/// Load the session catalog named by `--catalog`/`HST_CATALOG`.
///
/// Each invocation reads the file exactly once; the loaded value is passed
/// around explicitly, never cached process-wide.
pub(crate) fn load_catalog(global: &GlobalOpts) -> Result<Catalog> {
    let path = catalog_path(global)?;
    loader::load_with(&path, global.delimiter.resolve()).into_diagnostic()
}
