use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record {index}: field \"{field}\" {reason}")]
    InvalidRecord {
        index: usize,
        field: &'static str,
        reason: String,
    },
    #[error("Invalid filter range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
    #[error("Invalid map viewport {width}x{height} over extent [{left}, {right}, {bottom}, {top}]")]
    InvalidViewport {
        width: u32,
        height: u32,
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },
    #[error("Time {0} days is not representable as a calendar date")]
    InvalidTime(f64),
    #[error("Unable to write map to {path}: {source}")]
    NoOutput {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_record(index: usize, field: &'static str, reason: &str) -> Self {
        Error::InvalidRecord {
            index,
            field,
            reason: reason.to_string(),
        }
    }
}
