// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use crate::catalog::LanguageCatalog;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    /// File extension used when `--output` names a directory.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Text => "txt",
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    /// Serialize the catalog. Every format is newline-terminated.
    pub fn serialize(&self, catalog: &LanguageCatalog) -> Result<String> {
        match self {
            ReportOutputFormat::Text => {
                let mut text = catalog.render().join("\n");
                text.push('\n');
                Ok(text)
            }
            ReportOutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(catalog)?;
                json.push('\n');
                Ok(json)
            }
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(catalog)?),
        }
    }
}
