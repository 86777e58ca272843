// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in demonstration data

use crate::catalog::LanguageCatalog;
use crate::types::LanguageRecord;

/// The three demonstration records, in insertion order.
pub fn demo_languages() -> Vec<LanguageRecord> {
    vec![
        LanguageRecord::new(
            "Go",
            "Blue",
            8,
            2009,
            ["Concurrent", "Compiled", "Static typing"],
        ),
        LanguageRecord::new(
            "Python",
            "Yellow and Blue",
            3,
            1991,
            ["Dynamic typing", "Interpreted", "Object-oriented"],
        ),
        LanguageRecord::new(
            "JavaScript",
            "Yellow",
            1,
            1995,
            ["Dynamic typing", "Interpreted", "Prototype-based"],
        ),
    ]
}

/// Unsorted catalog holding the demonstration records.
pub fn demo_catalog() -> LanguageCatalog {
    let mut catalog = LanguageCatalog::new();
    for lang in demo_languages() {
        catalog.add(lang);
    }
    catalog
}
