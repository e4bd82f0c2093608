use crate::{
    CuratedEntry, EnrichedRecord, ExternalLink, FranchiseInfo, RecordKey, SelectionToken,
    SortKey, ViewMode,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The curated list was read at startup.
    CuratedLoaded(Vec<CuratedEntry>),
    /// Every record enricher settled; carries the complete collection.
    EnrichmentFinished(Vec<EnrichedRecord>),
    /// User picked a sort order.
    SortChanged(SortKey),
    /// User edited the search box.
    SearchChanged(String),
    /// User switched between tiles and list.
    ViewModeChanged(ViewMode),
    /// User opened the detail panel of a record.
    RecordSelected { key: RecordKey },
    /// User closed the detail panel.
    SelectionClosed,
    /// Genre lookup for a selection resolved (empty on failure).
    GenresResolved {
        token: SelectionToken,
        genres: Vec<String>,
    },
    /// External link lookup for a selection resolved (empty on failure).
    LinksResolved {
        token: SelectionToken,
        links: Vec<ExternalLink>,
    },
    /// Franchise aggregation for a selection resolved or failed.
    FranchiseResolved {
        token: SelectionToken,
        result: Result<FranchiseInfo, String>,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
