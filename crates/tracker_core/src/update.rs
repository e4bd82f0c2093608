use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CuratedLoaded(entries) => {
            state.begin_enrichment(entries.clone());
            vec![Effect::EnrichAll { entries }]
        }
        Msg::EnrichmentFinished(records) => {
            state.replace_records(records);
            Vec::new()
        }
        Msg::SortChanged(key) => {
            state.set_sort_key(key);
            Vec::new()
        }
        Msg::SearchChanged(text) => {
            state.set_search_text(text);
            Vec::new()
        }
        Msg::ViewModeChanged(mode) => {
            state.set_view_mode(mode);
            Vec::new()
        }
        Msg::RecordSelected { key } => match state.select(key) {
            Some((token, record)) => vec![Effect::LoadDetail { token, record }],
            None => Vec::new(),
        },
        Msg::SelectionClosed => {
            state.close_selection();
            Vec::new()
        }
        // Results for a stale token are silently dropped by the state.
        Msg::GenresResolved { token, genres } => {
            state.apply_genres(token, genres);
            Vec::new()
        }
        Msg::LinksResolved { token, links } => {
            state.apply_links(token, links);
            Vec::new()
        }
        Msg::FranchiseResolved { token, result } => {
            state.apply_franchise(token, result);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
