//! Line chart rendering

use serde::Deserialize;
use tracing::debug;

use crate::geometry::{PlotArea, Point, MAX_TICK_TARGET};
use crate::renderer::svg::{self, Attrs};
use crate::renderer::{PathData, SvgConfig};

use super::axis::{self, AxisConfig, ValueBounds};
use super::base::BaseConfig;
use super::data::XyPoint;
use super::options::{AxisOptions, BaseOptions};

/// Partial line chart options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    #[serde(flatten)]
    pub base: BaseOptions,
    #[serde(flatten)]
    pub axis: AxisOptions,
    pub line_width: Option<f64>,
    /// Draw a circular marker at each data point
    pub show_dots: Option<bool>,
    pub dot_radius: Option<f64>,
    /// Target number of ticks on the x axis
    pub x_ticks: Option<usize>,
    /// Shade the area between the line and the baseline
    pub fill_area: Option<bool>,
    /// Headroom added above the largest y value (0.1 = 10%)
    pub value_padding: Option<f64>,
    /// Extend the y range to include zero
    pub y_from_zero: Option<bool>,
}

impl LineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: BaseOptions) -> Self {
        self.base = base;
        self
    }

    pub fn with_axis(mut self, axis: AxisOptions) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_dots(mut self, show: bool) -> Self {
        self.show_dots = Some(show);
        self
    }

    pub fn with_dot_radius(mut self, radius: f64) -> Self {
        self.dot_radius = Some(radius);
        self
    }

    pub fn with_fill_area(mut self, fill: bool) -> Self {
        self.fill_area = Some(fill);
        self
    }

    pub fn with_y_from_zero(mut self, from_zero: bool) -> Self {
        self.y_from_zero = Some(from_zero);
        self
    }

    /// Shallow-merge `patch` over these options
    pub fn merge(self, patch: LineOptions) -> Self {
        Self {
            base: self.base.merge(patch.base),
            axis: self.axis.merge(patch.axis),
            line_width: patch.line_width.or(self.line_width),
            show_dots: patch.show_dots.or(self.show_dots),
            dot_radius: patch.dot_radius.or(self.dot_radius),
            x_ticks: patch.x_ticks.or(self.x_ticks),
            fill_area: patch.fill_area.or(self.fill_area),
            value_padding: patch.value_padding.or(self.value_padding),
            y_from_zero: patch.y_from_zero.or(self.y_from_zero),
        }
    }

    /// Fill in defaults
    pub fn resolve(&self) -> LineConfig {
        LineConfig {
            base: self.base.resolve(),
            axis: self.axis.resolve(),
            line_width: self.line_width.unwrap_or(2.0),
            show_dots: self.show_dots.unwrap_or(true),
            dot_radius: self.dot_radius.unwrap_or(4.0),
            x_ticks: self.x_ticks.unwrap_or(5).min(MAX_TICK_TARGET),
            fill_area: self.fill_area.unwrap_or(false),
            value_padding: self.value_padding.unwrap_or(0.1).max(0.0),
            y_from_zero: self.y_from_zero.unwrap_or(false),
        }
    }
}

/// Resolved line chart options
#[derive(Debug, Clone, PartialEq)]
pub struct LineConfig {
    pub base: BaseConfig,
    pub axis: AxisConfig,
    pub line_width: f64,
    pub show_dots: bool,
    pub dot_radius: f64,
    pub x_ticks: usize,
    pub fill_area: bool,
    pub value_padding: f64,
    pub y_from_zero: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        LineOptions::default().resolve()
    }
}

/// Render a line chart to an SVG document string
///
/// All plot content is drawn in a group translated to the plot origin, so
/// coordinates inside it are relative to the inner plotting area.
pub fn render_line(config: &LineConfig, data: &[XyPoint], svg_config: &SvgConfig) -> String {
    if data.is_empty() {
        debug!("line chart has no data, rendering placeholder");
        return config.base.render_empty(svg_config);
    }
    debug!(points = data.len(), "rendering line chart");

    let inner = config.base.inner_area();
    let area = PlotArea::new(0.0, 0.0, inner.width, inner.height);

    let xs: Vec<f64> = data.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = data.iter().map(|p| p.y).collect();
    let x_bounds = ValueBounds::exact(&xs);
    let y_bounds = ValueBounds::padded(&ys, config.value_padding, config.y_from_zero);

    let points: Vec<Point> = data
        .iter()
        .map(|p| Point::new(x_bounds.map_x(p.x, &area), y_bounds.map_y(p.y, &area)))
        .collect();

    let x_ticks = axis::visible_x_ticks(&x_bounds, config.x_ticks, &area);
    let y_ticks = axis::visible_y_ticks(&y_bounds, config.axis.y_ticks, &area);
    let color = config.base.color(0);

    let mut content = vec![];

    // grid first so it sits behind the data
    if config.axis.show_grid {
        content.extend(axis::vertical_grid(&x_ticks, &area, false));
        content.extend(axis::horizontal_grid(&y_ticks, &area, false));
    }

    if config.fill_area && points.len() > 1 {
        let baseline = y_bounds.map_y(0.0_f64.max(y_bounds.min).min(y_bounds.max), &area);
        content.push(area_path(&points, baseline, color));
    }

    for pair in points.windows(2) {
        content.push(svg::line(
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            Attrs::new()
                .set("class", "data-line")
                .set("stroke", color)
                .set("stroke-width", config.line_width),
        ));
    }

    if config.show_dots {
        for (i, (point, datum)) in points.iter().zip(data).enumerate() {
            content.push(svg::circle(
                point.x,
                point.y,
                config.dot_radius,
                Attrs::new()
                    .set("class", "data-point")
                    .set("fill", color)
                    .set("data-index", i)
                    .set("data-x", datum.x)
                    .set("data-y", datum.y),
            ));
        }
    }

    // axes last so they render on top
    if config.axis.show_axes {
        content.push(axis::x_axis_line(&area, area.bottom()));
        content.extend(axis::x_axis_ticks(&x_ticks, &area));
        content.extend(axis::y_axis(&y_ticks, &area));
        content.extend(axis::axis_captions(&config.axis, &area));
    }

    let mut doc = config.base.document(svg_config);
    doc.extend(config.base.title_markup());
    doc.push(svg::group(
        Attrs::new().set("transform", format!("translate({}, {})", inner.x, inner.y)),
        &content,
    ));
    doc.build()
}

/// Closed shape between the polyline and the horizontal baseline
fn area_path(points: &[Point], baseline: f64, color: &str) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut d = PathData::new().move_to(Point::new(first.x, baseline));
    for p in points {
        d = d.line_to(*p);
    }
    let d = d.line_to(Point::new(last.x, baseline)).close();

    svg::path(
        &d.to_svg_d(),
        Attrs::new()
            .set("class", "data-area")
            .set("fill", color)
            .set("fill-opacity", 0.2)
            .set("stroke", "none"),
    )
}

/// A line chart holding its options and data between renders
#[derive(Debug, Clone, Default)]
pub struct LineChart {
    options: LineOptions,
    data: Vec<XyPoint>,
}

impl LineChart {
    pub fn new(options: LineOptions, data: Vec<XyPoint>) -> Self {
        Self { options, data }
    }

    pub fn options(&self) -> &LineOptions {
        &self.options
    }

    pub fn data(&self) -> &[XyPoint] {
        &self.data
    }

    /// Resolved options with defaults filled in
    pub fn config(&self) -> LineConfig {
        self.options.resolve()
    }

    /// Replace the dataset
    pub fn update_data(&mut self, data: Vec<XyPoint>) {
        self.data = data;
    }

    /// Merge the fields set in `patch` over the current options
    pub fn update_options(&mut self, patch: LineOptions) {
        self.options = std::mem::take(&mut self.options).merge(patch);
    }

    pub fn render(&self) -> String {
        self.render_with(&SvgConfig::default())
    }

    pub fn render_with(&self, svg_config: &SvgConfig) -> String {
        render_line(&self.config(), &self.data, svg_config)
    }
}
