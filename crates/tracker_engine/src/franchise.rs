use tracker_core::{FranchiseInfo, SeriesSummary};
use tracker_logging::tracker_debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::matcher::normalize;
use crate::FetchError;

/// Subtypes that count toward a franchise; shorts, specials, OVAs and music
/// videos are left out.
pub const FRANCHISE_SUBTYPES: &[&str] = &["tv", "movie"];

/// Largest page Kitsu serves for a text search.
pub const FRANCHISE_SEARCH_LIMIT: u32 = 20;

/// Searches the catalog for `title` and aggregates the related entries.
pub async fn load_franchise(catalog: &dyn Catalog, title: &str) -> Result<FranchiseInfo, FetchError> {
    let candidates = catalog.search(title, Some(FRANCHISE_SEARCH_LIMIT)).await?;
    let info = aggregate_franchise(title, &candidates);
    tracker_debug!(
        "franchise for {:?}: {} of {} candidates, {} episodes",
        title,
        info.series.len(),
        candidates.len(),
        info.total_episodes
    );
    Ok(info)
}

/// Keeps TV series and films whose titles contain `query`, sums their
/// episodes and derives one status for the whole group.
pub fn aggregate_franchise(query: &str, candidates: &[CatalogEntry]) -> FranchiseInfo {
    let needle = normalize(query);
    let members: Vec<&CatalogEntry> = candidates
        .iter()
        .filter(|entry| is_franchise_subtype(entry))
        .filter(|entry| mentions(entry, &needle))
        .collect();

    FranchiseInfo {
        total_episodes: members
            .iter()
            .map(|entry| entry.episode_count.unwrap_or(0))
            .sum(),
        status: franchise_status(&members),
        series: members.iter().map(|entry| summarize(entry)).collect(),
    }
}

fn is_franchise_subtype(entry: &CatalogEntry) -> bool {
    entry.subtype.as_deref().is_some_and(|subtype| {
        FRANCHISE_SUBTYPES
            .iter()
            .any(|allowed| subtype.eq_ignore_ascii_case(allowed))
    })
}

fn mentions(entry: &CatalogEntry, needle: &str) -> bool {
    entry
        .canonical_title
        .iter()
        .chain(entry.abbreviated_titles.iter())
        .chain(entry.titles.values())
        .any(|title| normalize(title).contains(needle))
}

/// Airing beats upcoming; otherwise the newest member decides. Start dates
/// compare as plain strings.
fn franchise_status(members: &[&CatalogEntry]) -> Option<String> {
    let has_status = |wanted: &str| {
        members
            .iter()
            .any(|entry| entry.status.as_deref() == Some(wanted))
    };
    if has_status("current") {
        return Some("current".to_string());
    }
    if has_status("upcoming") {
        return Some("upcoming".to_string());
    }
    members
        .iter()
        .max_by(|a, b| {
            let a = a.start_date.as_deref().unwrap_or("");
            let b = b.start_date.as_deref().unwrap_or("");
            a.cmp(b)
        })
        .and_then(|latest| latest.status.clone())
}

fn summarize(entry: &CatalogEntry) -> SeriesSummary {
    SeriesSummary {
        id: entry.id.clone(),
        title: entry.display_title().to_string(),
        episode_count: entry.episode_count,
        status: entry.status.clone(),
        start_date: entry.start_date.clone(),
        subtype: entry.subtype.clone().unwrap_or_default(),
    }
}
