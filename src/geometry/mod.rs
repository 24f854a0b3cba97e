//! Geometry and number formatting shared by all chart types
//!
//! Everything here is a pure function of its inputs; the chart renderers
//! compose these helpers to go from data space to SVG user space.

pub mod math;
pub mod types;

pub use math::{
    calculate_ticks, degrees_to_radians, find_min_max, format_number, map_range, point_on_circle,
    MAX_TICK_TARGET,
};
pub use types::{PlotArea, Point};
