// SPDX-License-Identifier: PMPL-1.0-or-later

//! language-stats: a catalog of programming languages ordered by popularity.
//!
//! The [`catalog::LanguageCatalog`] owns a list of [`types::LanguageRecord`]
//! values, keeps them in insertion order until asked to sort, and renders
//! them as fixed-format text. The [`report`] module adds JSON and YAML
//! projections and file output for the CLI.

pub mod catalog;
pub mod demo;
pub mod report;
pub mod types;

pub use catalog::LanguageCatalog;
pub use types::LanguageRecord;
