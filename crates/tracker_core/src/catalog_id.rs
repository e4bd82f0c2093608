use std::fmt;

pub const FALLBACK_PREFIX: &str = "fallback-";
pub const ERROR_PREFIX: &str = "error-";

/// Where a record's catalog id came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// A real id returned by the catalog.
    Catalog,
    /// The search succeeded but returned no candidates.
    NoMatch,
    /// The search failed in transport or decoding.
    LookupFailed,
}

/// Why an enriched record carries a synthetic id instead of a catalog one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    NoMatch,
    LookupFailed,
}

impl From<Unmatched> for Provenance {
    fn from(reason: Unmatched) -> Self {
        match reason {
            Unmatched::NoMatch => Provenance::NoMatch,
            Unmatched::LookupFailed => Provenance::LookupFailed,
        }
    }
}

/// Render key and catalog identifier of an enriched record. Never empty.
///
/// Synthetic ids are derived from the title so they stay stable across
/// renders; any id-keyed catalog endpoint must refuse them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogId(String);

impl CatalogId {
    /// Wraps an id returned by the catalog. A blank id degrades to the
    /// fallback token for `title`.
    pub fn from_catalog(id: impl Into<String>, title: &str) -> Self {
        let id = id.into();
        if id.trim().is_empty() {
            Self::fallback(title)
        } else {
            Self(id)
        }
    }

    pub fn fallback(title: &str) -> Self {
        Self(format!("{FALLBACK_PREFIX}{}", dash_whitespace(title)))
    }

    pub fn error(title: &str) -> Self {
        Self(format!("{ERROR_PREFIX}{}", dash_whitespace(title)))
    }

    pub fn synthetic(reason: Unmatched, title: &str) -> Self {
        match reason {
            Unmatched::NoMatch => Self::fallback(title),
            Unmatched::LookupFailed => Self::error(title),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn provenance(&self) -> Provenance {
        if self.0.starts_with(FALLBACK_PREFIX) {
            Provenance::NoMatch
        } else if self.0.starts_with(ERROR_PREFIX) {
            Provenance::LookupFailed
        } else {
            Provenance::Catalog
        }
    }

    /// True for both fallback and error tokens.
    pub fn is_synthetic(&self) -> bool {
        self.provenance() != Provenance::Catalog
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn dash_whitespace(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
