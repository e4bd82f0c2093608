//! Tracker core: data model, pure state machine and view projection.
mod catalog_id;
mod detail;
mod effect;
mod entry;
mod msg;
mod projection;
mod record;
mod state;
mod update;
mod view_model;

pub use catalog_id::{CatalogId, Provenance, Unmatched, ERROR_PREFIX, FALLBACK_PREFIX};
pub use detail::{
    ExternalLink, FranchiseInfo, LinkSource, Lookup, SelectionDetail, SelectionToken, SeriesSummary,
    STREAMING_SERVICES,
};
pub use effect::Effect;
pub use entry::{CuratedEntry, WatchStatus};
pub use msg::Msg;
pub use projection::{
    filter_records, project, project_keyed, sort_records, RecordKey, SortKey, ViewMode, ViewState,
};
pub use record::{
    CatalogMetadata, EnrichedRecord, Rank, NOT_AVAILABLE, NO_SYNOPSIS, PLACEHOLDER_POSTER,
    PLACEHOLDER_THUMB,
};
pub use state::{AppState, Selection};
pub use update::update;
pub use view_model::{AppViewModel, RecordRowView, SelectionView};
