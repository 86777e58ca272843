// SPDX-License-Identifier: PMPL-1.0-or-later

//! In-memory catalog of language records.
//!
//! Records keep insertion order until [`LanguageCatalog::sort_by_rank`] is
//! called. The sort is stable: records with equal rank keep their relative
//! order, so repeated runs over the same input always print the same way.

use crate::types::LanguageRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TITLE: &str = "Programming Languages by Popularity Rank:";
pub const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCatalog {
    languages: Vec<LanguageRecord>,
}

impl LanguageCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the catalog.
    pub fn add(&mut self, record: LanguageRecord) {
        debug!(name = %record.name, rank = record.rank, "adding language");
        self.languages.push(record);
    }

    /// Reorder records by ascending rank, in place.
    pub fn sort_by_rank(&mut self) {
        self.languages.sort_by_key(|lang| lang.rank);
        debug!(count = self.languages.len(), "sorted catalog by rank");
    }

    /// Records in current order: insertion order, or rank order once sorted.
    pub fn languages(&self) -> &[LanguageRecord] {
        &self.languages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageRecord> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Display lines for the catalog in its current order.
    ///
    /// Always starts with the title and a separator; each record then adds
    /// its name/rank, creation year, features and a trailing separator.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 + self.languages.len() * 4);
        lines.push(TITLE.to_string());
        lines.push(SEPARATOR.to_string());

        for lang in &self.languages {
            lines.push(format!("{} (Rank: {})", lang.name, lang.rank));
            lines.push(format!("Created in: {}", lang.year_created));
            lines.push(format!("Features: {}", lang.feature_list()));
            lines.push(SEPARATOR.to_string());
        }

        lines
    }
}
