use chrono::{DateTime, Datelike};

use crate::error::{Error, Result};
use crate::record::MS_PER_DAY;

/// `YYYY/M` of the UTC instant `days` after the epoch.
pub fn format_label(days: f64) -> Result<String> {
    let ms = (days * MS_PER_DAY).trunc();
    if !ms.is_finite() || ms.abs() >= i64::MAX as f64 {
        return Err(Error::InvalidTime(days));
    }
    let date = DateTime::from_timestamp_millis(ms as i64).ok_or(Error::InvalidTime(days))?;
    Ok(format!("{}/{}", date.year(), date.month()))
}
