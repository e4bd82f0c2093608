use std::fmt;

use serde::{Deserialize, Deserializer};

/// Personal watch status as written in the curated list.
///
/// Anything other than the three known values is kept verbatim so it can be
/// displayed, and sorts after the known statuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum WatchStatus {
    Watching,
    Watched,
    #[default]
    Unwatched,
    Other(String),
}

impl WatchStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WatchStatus::Watching => "Watching",
            WatchStatus::Watched => "Watched",
            WatchStatus::Unwatched => "Unwatched",
            WatchStatus::Other(raw) => raw,
        }
    }

    /// Group order used by the `watched` sort.
    pub(crate) fn sort_priority(&self) -> u8 {
        match self {
            WatchStatus::Watching => 0,
            WatchStatus::Watched => 1,
            WatchStatus::Unwatched => 2,
            WatchStatus::Other(_) => 3,
        }
    }
}

impl From<String> for WatchStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Watching" => WatchStatus::Watching,
            "Watched" => WatchStatus::Watched,
            "Unwatched" | "" => WatchStatus::Unwatched,
            _ => WatchStatus::Other(raw),
        }
    }
}

impl From<&str> for WatchStatus {
    fn from(raw: &str) -> Self {
        WatchStatus::from(raw.to_string())
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hand-written entry of the curated list. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub watch_status: Option<WatchStatus>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub watch_order: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub overall_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub story_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub animation_visuals_rating: Option<f64>,
    #[serde(default)]
    pub pacing: Option<String>,
    #[serde(default)]
    pub favorite_character: Option<String>,
    #[serde(default)]
    pub favorite_part: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CuratedEntry {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Accepts `8`, `8.5`, `"8.5"` or `null`. Non-numeric text is treated as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Flag(bool),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Raw::Flag(_)) | None => None,
    };
    Ok(value.filter(|n| n.is_finite()))
}
