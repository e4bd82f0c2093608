use crate::projection::{project_keyed, RecordKey, SortKey, ViewMode, ViewState};
use crate::view_model::{AppViewModel, RecordRowView, SelectionView};
use crate::{
    CuratedEntry, EnrichedRecord, ExternalLink, FranchiseInfo, LinkSource, Lookup,
    SelectionDetail, SelectionToken,
};

/// The record currently open in the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub token: SelectionToken,
    pub record: EnrichedRecord,
    pub detail: SelectionDetail,
}

/// Owned UI state. Only `update` mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    curated: Vec<CuratedEntry>,
    records: Vec<EnrichedRecord>,
    loading: bool,
    view: ViewState,
    selection: Option<Selection>,
    last_token: SelectionToken,
    link_source: LinkSource,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            curated: Vec::new(),
            records: Vec::new(),
            loading: true,
            view: ViewState::default(),
            selection: None,
            last_token: 0,
            link_source: LinkSource::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tells the state which link provider the engine uses, so sections it
    /// cannot look up resolve at selection time.
    pub fn with_link_source(mut self, link_source: LinkSource) -> Self {
        self.link_source = link_source;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn curated(&self) -> &[CuratedEntry] {
        &self.curated
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = if self.loading {
            Vec::new()
        } else {
            project_keyed(&self.records, &self.view)
                .into_iter()
                .map(|(key, record)| RecordRowView::from_record(key, record))
                .collect()
        };
        AppViewModel {
            loading: self.loading,
            sort_key: self.view.sort_key,
            search_text: self.view.search_text.clone(),
            view_mode: self.view.view_mode,
            total_count: self.records.len(),
            rows,
            selection: self.selection.as_ref().map(|selection| SelectionView {
                record: selection.record.clone(),
                detail: selection.detail.clone(),
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_enrichment(&mut self, entries: Vec<CuratedEntry>) {
        self.curated = entries;
        self.loading = true;
        self.selection = None;
        self.mark_dirty();
    }

    /// Publishes the whole enriched collection at once.
    pub(crate) fn replace_records(&mut self, records: Vec<EnrichedRecord>) {
        self.records = records;
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn set_sort_key(&mut self, key: SortKey) {
        if self.view.sort_key != key {
            self.view.sort_key = key;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_search_text(&mut self, text: String) {
        if self.view.search_text != text {
            self.view.search_text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view.view_mode != mode {
            self.view.view_mode = mode;
            self.mark_dirty();
        }
    }

    /// Opens the detail panel for the record at `key`.
    ///
    /// Sections that cannot be looked up for this record are resolved right
    /// away; the rest start out pending.
    pub(crate) fn select(&mut self, key: RecordKey) -> Option<(SelectionToken, EnrichedRecord)> {
        if self.loading {
            return None;
        }
        let record = self.records.get(key.0)?.clone();

        self.last_token += 1;
        let token = self.last_token;
        let mut detail = SelectionDetail::pending();
        let synthetic = record.catalog_id.is_synthetic();
        if synthetic || record.genre_ref.is_none() {
            detail.genres = Lookup::Ready(Vec::new());
        }
        if synthetic && self.link_source == LinkSource::ById {
            detail.external_links = Lookup::Ready(Vec::new());
        }
        self.selection = Some(Selection {
            token,
            record: record.clone(),
            detail,
        });
        self.mark_dirty();
        Some((token, record))
    }

    pub(crate) fn close_selection(&mut self) {
        if self.selection.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_genres(&mut self, token: SelectionToken, genres: Vec<String>) -> bool {
        self.with_current_detail(token, |detail| detail.genres = Lookup::Ready(genres))
    }

    pub(crate) fn apply_links(&mut self, token: SelectionToken, links: Vec<ExternalLink>) -> bool {
        self.with_current_detail(token, |detail| detail.external_links = Lookup::Ready(links))
    }

    pub(crate) fn apply_franchise(
        &mut self,
        token: SelectionToken,
        result: Result<FranchiseInfo, String>,
    ) -> bool {
        self.with_current_detail(token, |detail| {
            detail.franchise = match result {
                Ok(info) => Lookup::Ready(info),
                Err(message) => Lookup::Failed(message),
            }
        })
    }

    /// Applies `change` only if `token` still names the open selection.
    fn with_current_detail(
        &mut self,
        token: SelectionToken,
        change: impl FnOnce(&mut SelectionDetail),
    ) -> bool {
        match self.selection.as_mut() {
            Some(selection) if selection.token == token => {
                change(&mut selection.detail);
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }
}
