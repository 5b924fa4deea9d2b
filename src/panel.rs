//! Panel state: the dataset, its time range and the current filter and hover snapshots.
//!
//! Every update consumes the panel and hands back the next snapshot.

use tracing::{debug, info, warn};

use crate::config_params::{LayerParams, PanelParams, ViewState};
use crate::error::Result;
use crate::filter::FilterRange;
use crate::hover::{self, HoverState};
use crate::label::format_label;
use crate::layer::ScatterplotLayer;
use crate::record::Record;
use crate::time_range::{self, DatasetTimeRange};

#[derive(Debug, Clone)]
pub struct Panel {
    pub params: PanelParams,
    pub view: ViewState,
    pub layer_params: LayerParams,
    data: Option<Vec<Record>>,
    time_range: DatasetTimeRange,
    filter: Option<FilterRange>,
    hover: HoverState,
}

impl Panel {
    pub fn new(params: PanelParams,
               view: ViewState,
               layer_params: LayerParams,
               data: Option<Vec<Record>>)
               -> Self {
        let time_range = time_range::compute(data.as_deref());
        let filter = time_range.bound().map(FilterRange::new);
        match time_range {
            DatasetTimeRange::Absent => warn!("panel has no dataset"),
            DatasetTimeRange::Empty => warn!("panel dataset is empty"),
            DatasetTimeRange::Bounded(b) => info!(min = b.min, max = b.max, "dataset time range"),
        }
        Panel {
            params,
            view,
            layer_params,
            data,
            time_range,
            filter,
            hover: HoverState::default(),
        }
    }

    pub fn data(&self) -> Option<&[Record]> {
        self.data.as_deref()
    }

    pub fn time_range(&self) -> DatasetTimeRange {
        self.time_range
    }

    pub fn filter(&self) -> Option<FilterRange> {
        self.filter
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn has_data(&self) -> bool {
        self.time_range.bound().is_some()
    }

    /// Moves the filter to `[min, max]` days. The dataset time range is left untouched.
    ///
    /// A panel without records keeps no filter.
    pub fn with_filter(self, min: f64, max: f64) -> Result<Self> {
        let filter = FilterRange::with_bounds(min, max)?;
        if !self.has_data() {
            debug!(min, max, "no records, filter range ignored");
            return Ok(self);
        }
        debug!(min, max, "filter range changed");
        Ok(Panel {
            filter: Some(filter),
            ..self
        })
    }

    /// Hits only reach the hover state of a pickable layer.
    pub fn on_hover(self, x: f64, y: f64, object: Option<Record>) -> Self {
        let object = if self.layer_params.pickable {
            object
        } else {
            None
        };
        let hover = hover::on_hover(self.hover, x, y, object);
        Panel { hover, ..self }
    }

    /// Nothing is drawn without records.
    pub fn layer(&self) -> Option<ScatterplotLayer<'_>> {
        match (self.data.as_deref(), self.filter) {
            (Some(data), Some(filter)) if !data.is_empty() => {
                Some(ScatterplotLayer::new(&self.layer_params, data, filter))
            }
            _ => None,
        }
    }

    /// Labels of both ends of the filter range.
    pub fn range_labels(&self) -> Result<Option<(String, String)>> {
        match self.filter {
            Some(filter) => {
                Ok(Some((format_label(filter.hard.min)?, format_label(filter.hard.max)?)))
            }
            None => Ok(None),
        }
    }
}
