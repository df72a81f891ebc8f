//! Error taxonomy for one poll cycle.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing a poll and rendering a
/// verdict.
///
/// The watch loop folds every variant into the same recovery path (log,
/// announce once, sleep, retry); the split exists so the announcement names
/// the actual failure.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("request to the homework API failed: {0}")]
    Transport(reqwest::Error),

    #[error("homework API returned HTTP {0}")]
    BadStatus(StatusCode),

    #[error("homework API response is not valid JSON: {0}")]
    Decode(reqwest::Error),

    #[error("homework API response is not a JSON object")]
    NotAnObject,

    #[error("homework API response has no `homeworks` list")]
    MissingHomeworks,

    #[error("unknown review status: {0:?}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_names_the_code() {
        let err = WatchError::BadStatus(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_unknown_status_names_the_keyword() {
        let err = WatchError::UnknownStatus("deferred".to_string());
        assert!(err.to_string().contains("deferred"));
    }
}
