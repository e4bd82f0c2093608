use crate::catalog::CatalogEntry;

/// Title variants compared for an exact match, besides the canonical title.
const MATCH_LOCALES: &[&str] = &["en", "en_jp", "ja_jp"];

/// Picks the candidate whose canonical, English, romanized or Japanese title
/// equals `query` after trimming and case folding. Without an exact hit the
/// first candidate wins; `None` only for an empty slice.
pub fn best_match<'a>(query: &str, candidates: &'a [CatalogEntry]) -> Option<&'a CatalogEntry> {
    let wanted = normalize(query);
    candidates
        .iter()
        .find(|candidate| exact_titles(candidate).any(|title| normalize(title) == wanted))
        .or_else(|| candidates.first())
}

fn exact_titles(candidate: &CatalogEntry) -> impl Iterator<Item = &str> {
    candidate
        .canonical_title
        .as_deref()
        .into_iter()
        .chain(MATCH_LOCALES.iter().filter_map(move |locale| candidate.title(locale)))
}

pub(crate) fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}
