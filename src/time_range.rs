use crate::record::Record;

/// Inclusive time span of a dataset, in days since the epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBound {
    pub min: f64,
    pub max: f64,
}

/// What a dataset says about its time span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatasetTimeRange {
    /// No dataset was supplied.
    Absent,
    /// A dataset without any record.
    Empty,
    Bounded(TimeBound),
}

impl DatasetTimeRange {
    pub fn bound(&self) -> Option<TimeBound> {
        match *self {
            DatasetTimeRange::Bounded(bound) => Some(bound),
            DatasetTimeRange::Absent | DatasetTimeRange::Empty => None,
        }
    }
}

pub fn compute(records: Option<&[Record]>) -> DatasetTimeRange {
    let records = match records {
        Some(records) => records,
        None => return DatasetTimeRange::Absent,
    };
    if records.is_empty() {
        return DatasetTimeRange::Empty;
    }
    let (min, max) = records
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), record| {
            let t = record.days();
            (min.min(t), max.max(t))
        });
    DatasetTimeRange::Bounded(TimeBound { min, max })
}
