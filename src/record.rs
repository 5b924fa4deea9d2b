//! Earthquake records and their ingestion from GeoJSON or flat JSON.

use std::fs;
use std::path::Path;

use geojson::{Feature, GeoJson, JsonValue, Value};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Milliseconds in a day.
pub const MS_PER_DAY: f64 = 8.64e7;

/// One earthquake event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub longitude: f64,
    pub latitude: f64,
    /// Kilometers below the surface.
    pub depth: f64,
    pub magnitude: f64,
}

impl Record {
    /// Time of the event in days since the epoch.
    pub fn days(&self) -> f64 {
        self.timestamp as f64 / MS_PER_DAY
    }

    pub fn from_feature(index: usize, feature: &Feature) -> Result<Record> {
        let geom = match feature.geometry {
            Some(ref geom) => geom,
            None => return Err(Error::invalid_record(index, "geometry", "is missing")),
        };
        let (longitude, latitude) = match geom.value {
            Value::Point(ref point) if point.len() >= 2 => (point[0], point[1]),
            Value::Point(_) => {
                return Err(Error::invalid_record(index, "geometry", "has fewer than 2 coordinates"))
            }
            _ => return Err(Error::invalid_record(index, "geometry", "is not a Point")),
        };
        let record = Record {
            timestamp: timestamp_field(index, feature.property("timestamp"))?,
            longitude,
            latitude,
            depth: number_field(index, feature.property("depth"), "depth")?,
            magnitude: number_field(index, feature.property("magnitude"), "magnitude")?,
        };
        record.validate(index)?;
        Ok(record)
    }

    /// A flat record: one JSON object holding all five fields.
    pub fn from_object(index: usize, value: &JsonValue) -> Result<Record> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_record(index, "record", "is not an object"))?;
        let record = Record {
            timestamp: timestamp_field(index, object.get("timestamp"))?,
            longitude: number_field(index, object.get("longitude"), "longitude")?,
            latitude: number_field(index, object.get("latitude"), "latitude")?,
            depth: number_field(index, object.get("depth"), "depth")?,
            magnitude: number_field(index, object.get("magnitude"), "magnitude")?,
        };
        record.validate(index)?;
        Ok(record)
    }

    fn validate(&self, index: usize) -> Result<()> {
        let fields = [("longitude", self.longitude),
                      ("latitude", self.latitude),
                      ("depth", self.depth),
                      ("magnitude", self.magnitude)];
        for &(name, value) in &fields {
            if !value.is_finite() {
                return Err(Error::invalid_record(index, name, "is not finite"));
            }
        }
        Ok(())
    }
}

fn number_field(index: usize, value: Option<&JsonValue>, name: &'static str) -> Result<f64> {
    match value {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| Error::invalid_record(index, name, "is not a number")),
        None => Err(Error::invalid_record(index, name, "is missing")),
    }
}

fn timestamp_field(index: usize, value: Option<&JsonValue>) -> Result<i64> {
    let value = match value {
        Some(value) => value,
        None => return Err(Error::invalid_record(index, "timestamp", "is missing")),
    };
    if let Some(ms) = value.as_i64() {
        return Ok(ms);
    }
    match value.as_f64() {
        Some(ms) if ms.is_finite() && ms.fract() == 0.0 && ms.abs() < i64::MAX as f64 => {
            Ok(ms as i64)
        }
        Some(_) => Err(Error::invalid_record(index, "timestamp", "is not a whole number of milliseconds")),
        None => Err(Error::invalid_record(index, "timestamp", "is not a number")),
    }
}

/// Parses either a GeoJSON FeatureCollection of points or a JSON array of flat records.
///
/// The first malformed record fails the whole load.
pub fn parse_records(raw: &str) -> Result<Vec<Record>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        let entries: Vec<JsonValue> = serde_json::from_str(trimmed)?;
        let records = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Record::from_object(i, entry))
            .collect::<Result<Vec<_>>>()?;
        debug!(count = records.len(), "parsed flat records");
        return Ok(records);
    }
    let features = match raw.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(Error::invalid_record(0, "geometry", "is not wrapped in a Feature"))
        }
    };
    let records = features
        .iter()
        .enumerate()
        .map(|(i, feature)| Record::from_feature(i, feature))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = records.len(), "parsed GeoJSON records");
    Ok(records)
}

pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let records = parse_records(&raw)?;
    info!(path = %path.display(), count = records.len(), "loaded dataset");
    Ok(records)
}
