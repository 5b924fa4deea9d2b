use tracing::debug;

use crate::attributes::{fill_color, filter_value, position, radius};
use crate::config_params::{LayerParams, MapExtent};
use crate::filter::FilterRange;
use crate::record::Record;

pub const LAYER_ID: &str = "earthquakes";

/// One record, evaluated for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub position: [f64; 3],
    /// In meters, before radius scale and pixel clipping.
    pub radius: f64,
    pub color: [u8; 3],
    pub filter_value: f64,
    pub opacity: f32,
    pub record: Record,
}

#[derive(Debug, Clone)]
pub struct ScatterplotLayer<'a> {
    pub id: &'static str,
    pub params: LayerParams,
    pub data: &'a [Record],
    pub filter: FilterRange,
}

impl<'a> ScatterplotLayer<'a> {
    pub fn new(params: &LayerParams, data: &'a [Record], filter: FilterRange) -> Self {
        ScatterplotLayer {
            id: LAYER_ID,
            params: *params,
            data,
            filter,
        }
    }

    /// Points left visible by the filter, in dataset order.
    pub fn points(&self) -> Vec<ScatterPoint> {
        let mut res = Vec::with_capacity(self.data.len());
        for record in self.data {
            let value = filter_value(record);
            let weight = self.filter.weight(value);
            if weight <= 0.0 {
                continue;
            }
            let mut pos = position(record);
            if self.params.wrap_longitude {
                pos[0] = wrap_longitude(pos[0]);
            }
            res.push(ScatterPoint {
                position: pos,
                radius: radius(record),
                color: fill_color(record),
                filter_value: value,
                opacity: self.params.opacity * weight,
                record: *record,
            });
        }
        debug!(layer = self.id,
               total = self.data.len(),
               visible = res.len(),
               "evaluated layer");
        res
    }

    /// Radius on screen, clipped to the layer pixel bounds.
    pub fn pixel_radius(&self, point: &ScatterPoint, meters_per_pixel: f64) -> f64 {
        let px = point.radius * self.params.radius_scale / meters_per_pixel;
        px.max(self.params.radius_min_pixels).min(self.params.radius_max_pixels)
    }
}

pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 {
        // keep the antimeridian on the side it was given
        180.0
    } else {
        wrapped
    }
}

/// Bounding box of the records as the layer places them, padded by a tenth on each side.
pub fn data_extent(records: &[Record], wrap: bool) -> Option<MapExtent> {
    if records.is_empty() {
        return None;
    }
    let mut extent = MapExtent {
        left: f64::MAX,
        right: f64::MIN,
        bottom: f64::MAX,
        top: f64::MIN,
    };
    for record in records {
        let lon = if wrap {
            wrap_longitude(record.longitude)
        } else {
            record.longitude
        };
        extent.left = extent.left.min(lon);
        extent.right = extent.right.max(lon);
        extent.bottom = extent.bottom.min(record.latitude);
        extent.top = extent.top.max(record.latitude);
    }
    // A single point still needs some room around it.
    let a = ((extent.right - extent.left) / 10.0).max(0.5);
    let b = ((extent.top - extent.bottom) / 10.0).max(0.5);
    extent.right += a;
    extent.left -= a;
    extent.top += b;
    extent.bottom -= b;
    Some(extent)
}
