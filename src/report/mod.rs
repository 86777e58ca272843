// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report rendering and output

pub mod formatter;
pub mod output;

use crate::catalog::LanguageCatalog;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use formatter::ReportFormatter;
pub use output::ReportOutputFormat;

/// Render the catalog in the requested format
pub fn render_report(catalog: &LanguageCatalog, format: ReportOutputFormat) -> Result<String> {
    format.serialize(catalog)
}

/// Save report to file, returning the path actually written
pub fn save_report<P: AsRef<Path>>(
    catalog: &LanguageCatalog,
    format: ReportOutputFormat,
    path: P,
) -> Result<PathBuf> {
    let formatter = ReportFormatter::new();
    formatter.save(catalog, format, path)
}

/// Print report to stdout
pub fn print_report(catalog: &LanguageCatalog, format: ReportOutputFormat) -> Result<()> {
    let formatter = ReportFormatter::new();
    formatter.print(catalog, format)
}
