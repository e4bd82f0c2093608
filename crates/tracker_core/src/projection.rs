//! Sort and filter of the enriched collection. Pure and recomputed on every
//! render; nothing here is cached.

use std::cmp::Ordering;

use crate::EnrichedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    OverallRating,
    Watched,
    WatchOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Tiles,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub sort_key: SortKey,
    pub search_text: String,
    pub view_mode: ViewMode,
}

/// Position of a record in the published collection. Catalog ids can
/// collide, so selections refer to records by this key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey(pub usize);

/// Sorts then filters. The filter keeps the relative order of the sort.
pub fn project<'a>(records: &'a [EnrichedRecord], view: &ViewState) -> Vec<&'a EnrichedRecord> {
    project_keyed(records, view)
        .into_iter()
        .map(|(_, record)| record)
        .collect()
}

/// `project`, with each row paired with the key of its record.
pub fn project_keyed<'a>(
    records: &'a [EnrichedRecord],
    view: &ViewState,
) -> Vec<(RecordKey, &'a EnrichedRecord)> {
    let needle = view.search_text.trim().to_lowercase();
    let mut keyed: Vec<(RecordKey, &EnrichedRecord)> = records
        .iter()
        .enumerate()
        .map(|(position, record)| (RecordKey(position), record))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| compare(a, b, view.sort_key));
    if !needle.is_empty() {
        keyed.retain(|(_, record)| matches_search(record, &needle));
    }
    keyed
}

/// Stable sort; ties fall back to case-insensitive title order.
pub fn sort_records(records: &[EnrichedRecord], key: SortKey) -> Vec<&EnrichedRecord> {
    let mut sorted: Vec<&EnrichedRecord> = records.iter().collect();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

pub fn filter_records<'a>(
    sorted: Vec<&'a EnrichedRecord>,
    search_text: &str,
) -> Vec<&'a EnrichedRecord> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return sorted;
    }
    sorted
        .into_iter()
        .filter(|record| matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &EnrichedRecord, needle: &str) -> bool {
    let fields = [
        Some(record.title()),
        Some(record.year.as_str()),
        Some(record.watch_status.as_str()),
        Some(record.synopsis.as_str()),
        record.entry.favorite_character.as_deref(),
        record.entry.notes.as_deref(),
    ];
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &EnrichedRecord, b: &EnrichedRecord, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::Title => Ordering::Equal,
        SortKey::OverallRating => rating(b).total_cmp(&rating(a)),
        SortKey::Watched => a
            .watch_status
            .sort_priority()
            .cmp(&b.watch_status.sort_priority()),
        SortKey::WatchOrder => watch_order(a).total_cmp(&watch_order(b)),
    };
    primary.then_with(|| compare_titles(a.title(), b.title()))
}

fn rating(record: &EnrichedRecord) -> f64 {
    record.entry.overall_rating.unwrap_or(0.0)
}

fn watch_order(record: &EnrichedRecord) -> f64 {
    record.entry.watch_order.unwrap_or(f64::INFINITY)
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
