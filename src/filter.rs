use crate::error::{Error, Result};
use crate::time_range::TimeBound;

/// Hard cutoff plus an inward soft band over which points fade out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterRange {
    pub hard: TimeBound,
    pub soft: TimeBound,
}

impl FilterRange {
    pub fn new(hard: TimeBound) -> Self {
        FilterRange {
            hard,
            soft: TimeBound {
                min: hard.min * 0.9 + hard.max * 0.1,
                max: hard.min * 0.1 + hard.max * 0.9,
            },
        }
    }

    pub fn with_bounds(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(FilterRange::new(TimeBound { min, max }))
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.hard.min && value <= self.hard.max
    }

    /// Visibility in `[0, 1]`: 1 inside the soft range, fading linearly to 0 at the hard bounds.
    pub fn weight(&self, value: f64) -> f32 {
        if !self.contains(value) {
            return 0.0;
        }
        if self.hard.min == self.hard.max {
            return 1.0;
        }
        let w = if value < self.soft.min {
            fade(value, self.hard.min, self.soft.min)
        } else if value > self.soft.max {
            fade(value, self.hard.max, self.soft.max)
        } else {
            1.0
        };
        w as f32
    }
}

fn fade(value: f64, edge: f64, inner: f64) -> f64 {
    let span = inner - edge;
    if span == 0.0 {
        return 1.0;
    }
    ((value - edge) / span).max(0.0).min(1.0)
}
