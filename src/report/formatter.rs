// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::catalog::LanguageCatalog;
use crate::report::ReportOutputFormat;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, catalog: &LanguageCatalog, format: ReportOutputFormat) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write(catalog, format, &mut handle)
    }

    pub fn write<W: Write>(
        &self,
        catalog: &LanguageCatalog,
        format: ReportOutputFormat,
        out: &mut W,
    ) -> Result<()> {
        let content = format.serialize(catalog)?;
        out.write_all(content.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write the report to `path`. A directory gets `languages.<ext>` inside it.
    pub fn save<P: AsRef<Path>>(
        &self,
        catalog: &LanguageCatalog,
        format: ReportOutputFormat,
        path: P,
    ) -> Result<PathBuf> {
        let path = resolve_output_path(path.as_ref(), format);
        let content = format.serialize(catalog)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), ?format, "report written");
        println!("Report saved to: {}", path.display());
        Ok(path)
    }
}

fn resolve_output_path(path: &Path, format: ReportOutputFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format!("languages.{}", format.extension()))
    } else {
        path.to_path_buf()
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageRecord;

    #[test]
    fn test_write_text_to_buffer() {
        let mut catalog = LanguageCatalog::new();
        catalog.add(LanguageRecord::new("Rust", "Orange", 14, 2015, ["Ownership"]));

        let mut buf = Vec::new();
        ReportFormatter::new()
            .write(&catalog, ReportOutputFormat::Text, &mut buf)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Rust (Rank: 14)\nCreated in: 2015\nFeatures: [Ownership]\n"));
        assert!(text.ends_with("----------------------------------------\n"));
    }

    #[test]
    fn test_write_json_is_newline_terminated() {
        let mut buf = Vec::new();
        ReportFormatter::new()
            .write(&LanguageCatalog::new(), ReportOutputFormat::Json, &mut buf)
            .unwrap();
        assert!(buf.ends_with(b"\n"));
    }
}
