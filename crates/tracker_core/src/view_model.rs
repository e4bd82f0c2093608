use crate::{
    CatalogId, EnrichedRecord, Rank, RecordKey, SelectionDetail, SortKey, ViewMode, WatchStatus,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub loading: bool,
    pub sort_key: SortKey,
    pub search_text: String,
    pub view_mode: ViewMode,
    /// Size of the enriched collection before filtering.
    pub total_count: usize,
    /// Sorted and filtered rows, in display order.
    pub rows: Vec<RecordRowView>,
    pub selection: Option<SelectionView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordRowView {
    /// What `Msg::RecordSelected` takes to open this row.
    pub key: RecordKey,
    pub catalog_id: CatalogId,
    pub title: String,
    pub watch_status: WatchStatus,
    pub year: String,
    pub episode_count: String,
    pub overall_rating: Option<f64>,
    pub popularity_rank: Rank,
    pub rating_rank: Rank,
    pub watch_order: Option<f64>,
    pub poster_url: String,
    pub poster_thumb_url: String,
}

impl RecordRowView {
    pub(crate) fn from_record(key: RecordKey, record: &EnrichedRecord) -> Self {
        Self {
            key,
            catalog_id: record.catalog_id.clone(),
            title: record.title().to_string(),
            watch_status: record.watch_status.clone(),
            year: record.year.clone(),
            episode_count: record.episode_count.clone(),
            overall_rating: record.entry.overall_rating,
            popularity_rank: record.popularity_rank,
            rating_rank: record.rating_rank,
            watch_order: record.entry.watch_order,
            poster_url: record.poster_url.clone(),
            poster_thumb_url: record.poster_thumb_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub record: EnrichedRecord,
    pub detail: SelectionDetail,
}
