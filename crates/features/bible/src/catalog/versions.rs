//! Translation codes and the numeric ids the upstream site files them under.

use std::collections::BTreeMap;

/// Built-in translations. `upstream.versions` in the config adds to or overrides these.
const BUILT_IN: &[(&str, u32)] = &[
    ("AMP", 1588),
    ("ASV", 12),
    ("BSB", 3034),
    ("CSB", 1713),
    ("ESV", 59),
    ("KJV", 1),
    ("MSG", 97),
    ("NASB", 2692),
    ("NASB1995", 100),
    ("NET", 107),
    ("NIV", 111),
    ("NKJV", 114),
    ("NLT", 116),
    ("WEB", 206),
    ("YLT", 821),
];

/// A resolved translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Upper-case code, as it appears in upstream URLs.
    pub code: String,
    pub id: u32,
}

/// Case-insensitive lookup of translation codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTable {
    ids: BTreeMap<String, u32>,
}

impl Default for VersionTable {
    fn default() -> Self {
        Self {
            ids: BUILT_IN.iter().map(|&(code, id)| (code.to_owned(), id)).collect(),
        }
    }
}

impl VersionTable {
    /// Built-in table extended by `overrides`; override keys are matched case-insensitively.
    #[must_use]
    pub fn with_overrides<'a>(overrides: impl IntoIterator<Item = (&'a String, &'a u32)>) -> Self {
        let mut table = Self::default();
        table.ids.extend(
            overrides.into_iter().map(|(code, id)| (code.trim().to_uppercase(), *id)),
        );
        table
    }

    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<Version> {
        let code = code.trim().to_uppercase();
        self.ids.get(&code).map(|&id| Version { code, id })
    }

    /// Known codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.ids.keys().map(String::as_str)
    }
}
