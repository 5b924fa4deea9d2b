use std::path::Path;

use svg::node::element::{Circle, Group, Rectangle as Rect, Text};
use svg::node::Text as NodeText;
use svg::Document;
use tracing::{debug, info};

use crate::config_params::MapExtent;
use crate::error::{Error, Result};
use crate::panel::Panel;

/// Meters per degree of longitude at the equator.
const METERS_PER_DEGREE: f64 = 111_320.0;

pub struct Converter<'a> {
    pub viewport_width: u32,
    pub viewport_height: u32,
    map_extent: &'a MapExtent,
    resolution: f64,
}

impl<'a> Converter<'a> {
    pub fn new(viewport_width: u32,
               viewport_height: u32,
               map_extent: &'a MapExtent)
               -> Result<Self> {
        map_extent.check_viewport(viewport_width, viewport_height)?;
        let xres = (map_extent.right - map_extent.left) / viewport_width as f64;
        let yres = (map_extent.top - map_extent.bottom) / viewport_height as f64;
        let res = xres.max(yres);
        Ok(Converter {
            viewport_width,
            viewport_height,
            map_extent,
            resolution: res,
        })
    }

    /// Pixel coordinates of a longitude/latitude pair.
    pub fn to_pixel(&self, lon: f64, lat: f64) -> (f64, f64) {
        ((lon - self.map_extent.left) / self.resolution,
         (self.map_extent.top - lat) / self.resolution)
    }

    pub fn meters_per_pixel(&self) -> f64 {
        self.resolution * METERS_PER_DEGREE
    }

    fn base_document(&self, map_style: &str, background: Option<&str>) -> Document {
        // The base map itself is drawn by the host, only its style travels with the document.
        Document::new()
            .set("x", "0")
            .set("y", "0")
            .set("width", format!("{}", self.viewport_width))
            .set("height", format!("{}", self.viewport_height))
            .add(Rect::new()
                     .set("id", "basemap")
                     .set("fill", background.unwrap_or("none"))
                     .set("width", "100%")
                     .set("height", "100%")
                     .set("data-map-style", map_style))
    }

    /// A panel whose dataset could not be loaded: only the base map and the error.
    pub fn render_error(&self, map_style: &str, background: Option<&str>, err: &Error) -> Document {
        self.base_document(map_style, background)
            .add(self.status_text(&format!("Error: {}", err)))
    }

    pub fn render(&self, panel: &Panel, background: Option<&str>) -> Result<Document> {
        let mut document = self.base_document(&panel.params.map_style, background);

        let layer = match panel.layer() {
            Some(layer) => layer,
            None => {
                info!("nothing to draw, rendering the no data indicator");
                return Ok(document.add(self.status_text("No data")));
            }
        };

        let mut group = Group::new().set("id", layer.id);
        let mpp = self.meters_per_pixel();
        let mut drawn = 0usize;
        for point in layer.points() {
            let (cx, cy) = self.to_pixel(point.position[0], point.position[1]);
            let [r, g, b] = point.color;
            group = group.add(Circle::new()
                                  .set("cx", cx)
                                  .set("cy", cy)
                                  .set("r", layer.pixel_radius(&point, mpp))
                                  .set("fill", format!("rgb({},{},{})", r, g, b))
                                  .set("fill-opacity", point.opacity)
                                  .set("data-filter-value", point.filter_value));
            drawn += 1;
        }
        debug!(drawn, "drew points");
        document = document.add(group);

        if let Some((low, high)) = panel.range_labels()? {
            let margin = self.viewport_width as f64 / 25.0;
            let y = self.viewport_height as f64 - self.viewport_height as f64 / 25.0;
            document = document
                .add(self.label("range-min", &low, margin, y, "start"))
                .add(self.label("range-max", &high, self.viewport_width as f64 - margin, y, "end"));
        }
        Ok(document)
    }

    fn status_text(&self, content: &str) -> Text {
        Text::new()
            .set("id", "status")
            .set("font-size", "22")
            .set("text-anchor", "middle")
            .set("x", self.viewport_width / 2)
            .set("y", self.viewport_height / 2)
            .add(NodeText::new(content))
    }

    fn label(&self, id: &str, content: &str, x: f64, y: f64, anchor: &str) -> Text {
        Text::new()
            .set("id", id)
            .set("font-size", "14")
            .set("x", x)
            .set("y", y)
            .set("text-anchor", anchor)
            .add(NodeText::new(content))
    }
}

pub fn save<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    let path = path.as_ref();
    svg::save(path, document).map_err(|source| Error::NoOutput {
                                          path: path.display().to_string(),
                                          source,
                                      })?;
    info!(path = %path.display(), "map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_extent_corners() {
        let extent = MapExtent {
            left: -10.0,
            right: 10.0,
            bottom: -5.0,
            top: 5.0,
        };
        let converter = Converter::new(200, 100, &extent).unwrap();
        assert_eq!(converter.to_pixel(-10.0, 5.0), (0.0, 0.0));
        assert_eq!(converter.to_pixel(10.0, -5.0), (200.0, 100.0));
        assert_eq!(converter.to_pixel(0.0, 0.0), (100.0, 50.0));
        assert_eq!(converter.meters_per_pixel(), 0.1 * METERS_PER_DEGREE);
    }

    #[test]
    fn degenerate_viewports_are_rejected() {
        let flat = MapExtent {
            left: -120.0,
            right: -120.0,
            bottom: 36.0,
            top: 36.0,
        };
        assert!(Converter::new(400, 400, &flat).is_err());
        let extent = MapExtent {
            left: -10.0,
            right: 10.0,
            bottom: -5.0,
            top: 5.0,
        };
        assert!(Converter::new(0, 100, &extent).is_err());
        assert!(Converter::new(100, 0, &extent).is_err());
        let inverted = MapExtent {
            left: 10.0,
            right: -10.0,
            bottom: -5.0,
            top: 5.0,
        };
        assert!(Converter::new(100, 100, &inverted).is_err());
        let unbounded = MapExtent {
            left: f64::NEG_INFINITY,
            right: 10.0,
            bottom: -5.0,
            top: 5.0,
        };
        assert!(Converter::new(100, 100, &unbounded).is_err());
    }
}
