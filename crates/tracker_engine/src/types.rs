use std::{fmt, io};

use tracker_core::EnrichedRecord;

use crate::detail::DetailEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Every entry of an enrichment pass has settled.
    EnrichmentFinished(Vec<EnrichedRecord>),
    /// One section of a selection's detail resolved.
    Detail(DetailEvent),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure to bring the engine up. Nothing is running when this is returned.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not build the http client: {0}")]
    Client(#[from] FetchError),
    #[error("could not start the engine runtime: {0}")]
    Runtime(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_errors_name_the_failing_part() {
        let runtime = EngineError::Runtime(io::Error::new(io::ErrorKind::Other, "no threads"));
        let client: EngineError =
            FetchError::new(FailureKind::InvalidUrl, "bad proxy").into();

        assert_eq!(
            runtime.to_string(),
            "could not start the engine runtime: no threads"
        );
        assert!(client.to_string().starts_with("could not build the http client: "));
        assert!(std::error::Error::source(&runtime).is_some());
    }
}
