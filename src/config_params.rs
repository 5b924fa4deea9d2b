use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_ACCESS_TOKEN";

#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 4]")]
pub struct MapExtent {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl From<[f64; 4]> for MapExtent {
    fn from(e: [f64; 4]) -> Self {
        MapExtent {
            left: e[0],
            right: e[1],
            bottom: e[2],
            top: e[3],
        }
    }
}

impl MapExtent {
    /// An extent is drawable over a viewport when both have a finite, non-zero size.
    pub fn check_viewport(&self, width: u32, height: u32) -> Result<()> {
        let spans = [self.right - self.left, self.top - self.bottom];
        if width == 0 || height == 0 || spans.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(Error::InvalidViewport {
                width,
                height,
                left: self.left,
                right: self.right,
                bottom: self.bottom,
                top: self.top,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub map: MapParams,
    #[serde(default)]
    pub panel: PanelParams,
    #[serde(default)]
    pub view: ViewState,
    #[serde(default)]
    pub layer: LayerParams,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapParams {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub extent: Option<MapExtent>,
    /// Dataset path; without it the panel has no data at all.
    pub data: Option<PathBuf>,
    pub background: Option<String>,
}

/// Options a dashboard host hands to the panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelParams {
    // Accepted for compatibility with the host, not used for drawing.
    pub radius: Option<f64>,
    pub upper_percentile: Option<f64>,
    pub coverage: Option<f64>,
    pub map_style: String,
    pub access_token: Option<String>,
}

impl Default for PanelParams {
    fn default() -> Self {
        PanelParams {
            radius: None,
            upper_percentile: None,
            coverage: None,
            map_style: DEFAULT_MAP_STYLE.to_string(),
            access_token: None,
        }
    }
}

impl PanelParams {
    /// The configured token, else the one from the environment.
    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| env::var(ACCESS_TOKEN_VAR).ok())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            latitude: 36.5,
            longitude: -120.0,
            zoom: 5.5,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

impl ViewState {
    /// Area seen at this zoom level, as a web-mercator tile pyramid would show it.
    pub fn extent(&self, width: u32, height: u32) -> MapExtent {
        let deg_per_px = 360.0 / (256.0 * 2f64.powf(self.zoom));
        let half_w = deg_per_px * width as f64 / 2.0;
        let half_h = deg_per_px * height as f64 / 2.0;
        MapExtent {
            left: self.longitude - half_w,
            right: self.longitude + half_w,
            bottom: self.latitude - half_h,
            top: self.latitude + half_h,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayerParams {
    pub opacity: f32,
    pub radius_scale: f64,
    pub radius_min_pixels: f64,
    pub radius_max_pixels: f64,
    pub wrap_longitude: bool,
    pub pickable: bool,
}

impl Default for LayerParams {
    fn default() -> Self {
        LayerParams {
            opacity: 0.8,
            radius_scale: 100.0,
            radius_min_pixels: 1.0,
            radius_max_pixels: f64::MAX,
            wrap_longitude: true,
            pickable: true,
        }
    }
}

impl Config {
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        let (width, height) = (config.map.width, config.map.height);
        match config.map.extent {
            Some(extent) => extent.check_viewport(width, height)?,
            None if width == 0 || height == 0 => {
                return Err(Error::InvalidViewport {
                    width,
                    height,
                    left: 0.0,
                    right: 0.0,
                    bottom: 0.0,
                    top: 0.0,
                })
            }
            // Fallback extents are derived from the data or the view later on.
            None => {}
        }
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Config::from_toml(&raw)
    }
}
