// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for language-stats

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single programming language and its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub name: String,
    /// Descriptive only, never validated
    pub color: String,
    /// Popularity ordinal; lower sorts first
    pub rank: i64,
    pub year_created: i64,
    pub features: Vec<String>,
}

impl LanguageRecord {
    pub fn new<N, C, F, S>(name: N, color: C, rank: i64, year_created: i64, features: F) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            color: color.into(),
            rank,
            year_created,
            features: features.into_iter().map(Into::into).collect(),
        }
    }

    /// Feature tags in bracketed, space-separated form, e.g. `[Compiled Static typing]`.
    pub fn feature_list(&self) -> FeatureList<'_> {
        FeatureList(&self.features)
    }
}

/// Display adapter for a record's feature tags.
pub struct FeatureList<'a>(&'a [String]);

impl fmt::Display for FeatureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(" "))
    }
}
