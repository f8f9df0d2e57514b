use thiserror::Error;

/// A run fails either on the search request or on the output file;
/// there is no partial-success state.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("search request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("writing output failed: {0}")]
    Write(#[from] std::io::Error),
}
