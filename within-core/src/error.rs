use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed path: {0}")]
    MalformedPath(String),
    #[error("Unrecognized street name shape: {0}")]
    UnrecognizedStreetNameShape(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
