use thiserror::Error;

/// Failure modes of a city weather lookup.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no location found for \"{0}\"")]
    CityNotFound(String),
    #[error("weather service request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
