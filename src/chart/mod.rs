//! Chart renderers
//!
//! Each chart type is a pure function from a resolved config and a data
//! slice to an SVG document string. The pipeline is the same for all of them:
//!
//! 1. partial options resolve into a config with defaults filled in
//! 2. data values map into the inner plotting area
//! 3. axis ticks are computed (bar and line)
//! 4. markup is assembled into an [`SvgDocument`](crate::renderer::SvgDocument)
//!
//! The [`BarChart`], [`LineChart`] and [`PieChart`] wrappers keep options and
//! data between renders for callers that update them in place.

pub mod axis;
pub mod bar;
pub mod base;
pub mod data;
pub mod line;
pub mod options;
pub mod pie;

pub use axis::{AxisConfig, ValueBounds};
pub use bar::{bar_marks, render_bar, BarChart, BarConfig, BarMark, BarOptions};
pub use base::{BaseConfig, EMPTY_MESSAGE};
pub use data::{LabelValue, XyPoint};
pub use line::{render_line, LineChart, LineConfig, LineOptions};
pub use options::{AxisOptions, BaseOptions, Margin, DEFAULT_COLORS};
pub use pie::{pie_slices, render_pie, PieChart, PieConfig, PieOptions, PieSlice};
