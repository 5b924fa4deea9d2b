//! Per-record visual attributes fed to the scatterplot layer.

use crate::record::{Record, MS_PER_DAY};

/// `[longitude, latitude, elevation in meters]`, depth below the surface being negative.
pub fn position(record: &Record) -> [f64; 3] {
    [record.longitude, record.latitude, -record.depth * 1000.0]
}

/// Grows by a factor two per unit of magnitude; pixel clipping belongs to the layer.
pub fn radius(record: &Record) -> f64 {
    2f64.powf(record.magnitude)
}

/// Raw color channels, possibly outside of `[0, 255]` for very deep events.
pub fn fill_color_channels(record: &Record) -> [f64; 3] {
    let r = record.depth.max(0.0).sqrt();
    [255.0 - r * 15.0, r * 5.0, r * 10.0]
}

/// Channels are rounded then clamped to the byte range.
pub fn fill_color(record: &Record) -> [u8; 3] {
    let c = fill_color_channels(record);
    [to_byte(c[0]), to_byte(c[1]), to_byte(c[2])]
}

fn to_byte(channel: f64) -> u8 {
    channel.round().max(0.0).min(255.0) as u8
}

/// Days since the epoch, the scalar compared against the filter range.
pub fn filter_value(record: &Record) -> f64 {
    record.timestamp as f64 / MS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quake(depth: f64, magnitude: f64) -> Record {
        Record {
            timestamp: 0,
            longitude: -120.0,
            latitude: 36.5,
            depth,
            magnitude,
        }
    }

    #[test]
    fn shallow_events_are_red() {
        assert_eq!(fill_color(&quake(0.0, 1.0)), [255, 0, 0]);
    }

    #[test]
    fn negative_depth_is_treated_as_surface() {
        assert_eq!(fill_color(&quake(-4.0, 1.0)), [255, 0, 0]);
    }

    #[test]
    fn extreme_depth_is_clamped() {
        // r = 30: (255 - 450, 150, 300)
        let q = quake(900.0, 1.0);
        assert_eq!(fill_color_channels(&q), [-195.0, 150.0, 300.0]);
        assert_eq!(fill_color(&q), [0, 150, 255]);
    }

    #[test]
    fn negative_magnitude_shrinks() {
        assert_eq!(radius(&quake(0.0, -1.0)), 0.5);
    }
}
