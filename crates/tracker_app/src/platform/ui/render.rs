use std::fmt::Write;

use tracker_core::{
    AppViewModel, ExternalLink, FranchiseInfo, Lookup, RecordRowView, SelectionView, SortKey,
    ViewMode,
};

const LOADING: &str = "Loading...";
const NONE_FOUND: &str = "None found.";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", status_line(view));
    out.push('\n');

    if view.loading {
        out.push_str("Loading anime list...\n");
    } else if view.rows.is_empty() {
        out.push_str("No titles match the current search.\n");
    } else {
        match view.view_mode {
            ViewMode::Tiles => render_tiles(&mut out, &view.rows),
            ViewMode::List => render_list(&mut out, &view.rows),
        }
    }

    if let Some(selection) = &view.selection {
        out.push('\n');
        render_selection(&mut out, selection);
    }
    out
}

fn status_line(view: &AppViewModel) -> String {
    let mut line = format!(
        "Sort: {} | View: {} | Showing {} of {}",
        sort_label(view.sort_key),
        view_label(view.view_mode),
        view.rows.len(),
        view.total_count
    );
    if !view.search_text.trim().is_empty() {
        let _ = write!(line, " | Search: {:?}", view.search_text);
    }
    line
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Title => "Title",
        SortKey::OverallRating => "Rating",
        SortKey::Watched => "Watched",
        SortKey::WatchOrder => "Watch order",
    }
}

fn view_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Tiles => "Tiles",
        ViewMode::List => "List",
    }
}

fn render_tiles(out: &mut String, rows: &[RecordRowView]) {
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "[{}] {} ({})", index + 1, row.title, row.year);
        let _ = writeln!(
            out,
            "    {} | Episodes: {} | Rating: {}",
            row.watch_status,
            row.episode_count,
            number_or_dash(row.overall_rating)
        );
        let _ = writeln!(
            out,
            "    Popularity: {} | Rating rank: {}",
            row.popularity_rank, row.rating_rank
        );
        let _ = writeln!(out, "    {}", row.poster_url);
    }
}

fn render_list(out: &mut String, rows: &[RecordRowView]) {
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} | {} | {} | {} eps | {} | #{}",
            index + 1,
            row.title,
            row.year,
            row.watch_status,
            row.episode_count,
            number_or_dash(row.overall_rating),
            number_or_dash(row.watch_order)
        );
    }
}

fn render_selection(out: &mut String, selection: &SelectionView) {
    let record = &selection.record;
    let entry = &record.entry;
    let title = if record.title().trim().is_empty() {
        "Unknown Title"
    } else {
        record.title()
    };
    let _ = writeln!(out, "== {} ==", title);
    let _ = writeln!(out, "Summary: {}", record.synopsis);
    let _ = writeln!(out, "Status: {}", record.watch_status);
    let _ = writeln!(out, "Catalog status: {}", record.catalog_status);
    let _ = writeln!(out, "Popularity rank: {}", record.popularity_rank);
    let _ = writeln!(out, "Rating rank: {}", record.rating_rank);
    let _ = writeln!(out, "Watch order: {}", number_or_dash(entry.watch_order));
    let _ = writeln!(out, "Overall rating: {}", number_or_dash(entry.overall_rating));
    let _ = writeln!(out, "Story rating: {}", number_or_dash(entry.story_rating));
    let _ = writeln!(
        out,
        "Animation/visuals rating: {}",
        number_or_dash(entry.animation_visuals_rating)
    );
    for (label, value) in [
        ("Pacing", &entry.pacing),
        ("Favorite character", &entry.favorite_character),
        ("Favorite part", &entry.favorite_part),
        ("Notes", &entry.notes),
    ] {
        if let Some(value) = value {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    let _ = writeln!(out, "Year: {}", record.year);
    let _ = writeln!(out, "Episodes: {}", record.episode_count);

    let detail = &selection.detail;
    let _ = writeln!(out, "Genres: {}", genres_text(&detail.genres));
    render_links(out, &detail.external_links);
    render_franchise(out, &detail.franchise);
}

fn genres_text(genres: &Lookup<Vec<String>>) -> String {
    match genres {
        Lookup::Pending => LOADING.to_string(),
        Lookup::Ready(names) if names.is_empty() => NONE_FOUND.to_string(),
        Lookup::Ready(names) => names.join(", "),
        Lookup::Failed(message) => format!("lookup failed ({message})"),
    }
}

fn render_links(out: &mut String, links: &Lookup<Vec<ExternalLink>>) {
    match links {
        Lookup::Pending => {
            let _ = writeln!(out, "Links: {LOADING}");
        }
        Lookup::Ready(links) if links.is_empty() => {
            let _ = writeln!(out, "Links: {NONE_FOUND}");
        }
        Lookup::Ready(links) => {
            let _ = writeln!(out, "Links:");
            for link in links {
                if link.is_streaming_service() {
                    let _ = writeln!(out, "  > {}: {}", link.site, link.url);
                } else {
                    let _ = writeln!(out, "  - {}", link.site);
                }
            }
        }
        Lookup::Failed(message) => {
            let _ = writeln!(out, "Links: lookup failed ({message})");
        }
    }
}

fn render_franchise(out: &mut String, franchise: &Lookup<FranchiseInfo>) {
    match franchise {
        Lookup::Pending => {
            let _ = writeln!(out, "Franchise: {LOADING}");
        }
        Lookup::Ready(info) if info.series.is_empty() => {
            let _ = writeln!(out, "Franchise: {NONE_FOUND}");
        }
        Lookup::Ready(info) => {
            let _ = writeln!(
                out,
                "Franchise: {} series, {} episodes, {}",
                info.series.len(),
                info.total_episodes,
                info.status.as_deref().unwrap_or("status unknown")
            );
            for series in &info.series {
                let episodes = series
                    .episode_count
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let _ = writeln!(
                    out,
                    "  - {} [{}] {} eps, {}",
                    series.title,
                    series.subtype,
                    episodes,
                    series.start_date.as_deref().unwrap_or("date unknown")
                );
            }
        }
        Lookup::Failed(message) => {
            let _ = writeln!(out, "Franchise: lookup failed ({message})");
        }
    }
}

fn number_or_dash(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
