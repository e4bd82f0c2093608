use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracker_core::CuratedEntry;

#[derive(Debug, thiserror::Error)]
pub enum CuratedListError {
    #[error("could not read curated list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid curated list {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the curated list: a JSON array of entries, kept in file order.
pub fn load_curated_list(path: &Path) -> Result<Vec<CuratedEntry>, CuratedListError> {
    let content = fs::read_to_string(path).map_err(|source| CuratedListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CuratedListError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
