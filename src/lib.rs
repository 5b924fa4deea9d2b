//! Time-filterable scatter map of earthquake events.

pub mod attributes;
pub mod config_params;
pub mod error;
pub mod filter;
pub mod hover;
pub mod label;
pub mod layer;
pub mod panel;
pub mod record;
pub mod render;
pub mod time_range;

pub use error::{Error, Result};
pub use panel::Panel;
pub use record::Record;
