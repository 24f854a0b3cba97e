//! Pie chart rendering

use serde::Deserialize;
use tracing::debug;

use crate::error::ChartError;
use crate::geometry::{degrees_to_radians, point_on_circle, Point};
use crate::renderer::svg::{self, Attrs};
use crate::renderer::{PathData, SvgConfig};

use super::base::BaseConfig;
use super::data::LabelValue;
use super::options::BaseOptions;

/// Radius fractions for the labels and leader lines
const VALUE_LABEL_RADIUS: f64 = 0.6;
const LEADER_START_RADIUS: f64 = 1.02;
const LEADER_END_RADIUS: f64 = 1.12;
const CATEGORY_LABEL_RADIUS: f64 = 1.15;

const LEGEND_ROW_HEIGHT: f64 = 20.0;
const LEGEND_SWATCH_SIZE: f64 = 12.0;

/// Partial pie chart options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PieOptions {
    #[serde(flatten)]
    pub base: BaseOptions,
    /// Draw category labels outside the pie with leader lines
    pub show_labels: Option<bool>,
    /// Draw percentage labels inside the slices
    pub show_values: Option<bool>,
    pub show_legend: Option<bool>,
    /// Angle of the first slice edge in degrees (0 = 3 o'clock, clockwise)
    pub start_angle: Option<f64>,
    /// Angle where the last slice ends, in degrees
    pub end_angle: Option<f64>,
}

impl PieOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: BaseOptions) -> Self {
        self.base = base;
        self
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = Some(show);
        self
    }

    pub fn with_values(mut self, show: bool) -> Self {
        self.show_values = Some(show);
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = Some(show);
        self
    }

    /// Set the angular range covered by the slices, in degrees
    pub fn with_angles(mut self, start: f64, end: f64) -> Self {
        self.start_angle = Some(start);
        self.end_angle = Some(end);
        self
    }

    /// Shallow-merge `patch` over these options
    pub fn merge(self, patch: PieOptions) -> Self {
        Self {
            base: self.base.merge(patch.base),
            show_labels: patch.show_labels.or(self.show_labels),
            show_values: patch.show_values.or(self.show_values),
            show_legend: patch.show_legend.or(self.show_legend),
            start_angle: patch.start_angle.or(self.start_angle),
            end_angle: patch.end_angle.or(self.end_angle),
        }
    }

    /// Fill in defaults
    pub fn resolve(&self) -> PieConfig {
        PieConfig {
            base: self.base.resolve(),
            show_labels: self.show_labels.unwrap_or(true),
            show_values: self.show_values.unwrap_or(true),
            show_legend: self.show_legend.unwrap_or(true),
            start_angle: self.start_angle.unwrap_or(0.0),
            end_angle: self.end_angle.unwrap_or(360.0),
        }
    }
}

/// Resolved pie chart options
#[derive(Debug, Clone, PartialEq)]
pub struct PieConfig {
    pub base: BaseConfig,
    pub show_labels: bool,
    pub show_values: bool,
    pub show_legend: bool,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieConfig {
    /// Total angle shared among the slices, in degrees
    pub fn angular_range(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

impl Default for PieConfig {
    fn default() -> Self {
        PieOptions::default().resolve()
    }
}

/// Geometry and metadata of one pie slice
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
    /// Share of the total, 0 to 100
    pub percentage: f64,
}

impl PieSlice {
    /// Angular span in degrees
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle halfway through the slice, in radians
    pub fn mid_angle(&self) -> f64 {
        degrees_to_radians((self.start_angle + self.end_angle) / 2.0)
    }
}

/// Compute slice angles and shares without rendering them
///
/// Fails when a value is negative or not finite, or when every value is
/// zero. Exposes index, label, value and color per slice for callers that
/// attach interactivity to the rendered markup.
pub fn pie_slices(config: &PieConfig, data: &[LabelValue]) -> Result<Vec<PieSlice>, ChartError> {
    if let Some(bad) = data.iter().find(|d| !d.value.is_finite() || d.value < 0.0) {
        return Err(ChartError::invalid_slice(&bad.label, bad.value));
    }

    if data.is_empty() {
        return Ok(vec![]);
    }

    // values are summed relative to the largest one so the total cannot
    // overflow for finite inputs
    let largest = data.iter().map(|d| d.value).fold(0.0, f64::max);
    if largest <= 0.0 {
        return Err(ChartError::ZeroTotal);
    }
    let total: f64 = data.iter().map(|d| d.value / largest).sum();

    let range = config.angular_range();
    let mut current = config.start_angle;

    Ok(data
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let share = item.value / largest / total;
            let start = current;
            current += share * range;
            PieSlice {
                index,
                label: item.label.clone(),
                value: item.value,
                color: config.base.color(index).to_string(),
                start_angle: start,
                end_angle: current,
                percentage: share * 100.0,
            }
        })
        .collect())
}

/// Render a pie chart to an SVG document string
pub fn render_pie(
    config: &PieConfig,
    data: &[LabelValue],
    svg_config: &SvgConfig,
) -> Result<String, ChartError> {
    if data.is_empty() {
        debug!("pie chart has no data, rendering placeholder");
        return Ok(config.base.render_empty(svg_config));
    }

    let slices = pie_slices(config, data)?;
    debug!(slices = slices.len(), "rendering pie chart");

    let area = config.base.inner_area();
    let radius = area.width.min(area.height) / 2.0;
    let center = area.center();

    let mut content: Vec<String> = slices.iter().map(|s| slice_path(s, radius)).collect();
    if config.show_values {
        content.extend(slices.iter().map(|s| value_label(s, radius)));
    }
    if config.show_labels {
        for slice in &slices {
            content.extend(category_label(slice, radius));
        }
    }

    let mut doc = config.base.document(svg_config);
    doc.extend(config.base.title_markup());
    doc.push(svg::group(
        Attrs::new().set("transform", format!("translate({}, {})", center.x, center.y)),
        &content,
    ));
    if config.show_legend {
        doc.push(legend(config, &slices));
    }

    Ok(doc.build())
}

/// Wedge from the center to the circle boundary, relative to the pie center
fn slice_path(slice: &PieSlice, radius: f64) -> String {
    let center = Point::origin();
    let span = slice.span();
    let start_rad = degrees_to_radians(slice.start_angle);
    let start = point_on_circle(center, radius, start_rad);
    let sweep = span >= 0.0;

    let d = if span.abs() >= 360.0 {
        // a single arc cannot close on its own start point, so trace the
        // full circle as two halves
        let opposite = point_on_circle(center, radius, start_rad + std::f64::consts::PI);
        PathData::new()
            .move_to(start)
            .arc_to(opposite, radius, false, sweep)
            .arc_to(start, radius, false, sweep)
            .close()
    } else {
        let end = point_on_circle(center, radius, degrees_to_radians(slice.end_angle));
        PathData::new()
            .move_to(center)
            .line_to(start)
            .arc_to(end, radius, span.abs() > 180.0, sweep)
            .close()
    };

    svg::path(
        &d.to_svg_d(),
        Attrs::new()
            .set("class", "slice")
            .set("fill", &slice.color)
            .set("stroke", "white")
            .set("stroke-width", 1)
            .set("data-index", slice.index)
            .set("data-label", &slice.label)
            .set("data-value", slice.value)
            .set("data-percentage", format!("{:.1}", slice.percentage)),
    )
}

fn value_label(slice: &PieSlice, radius: f64) -> String {
    let pos = point_on_circle(Point::origin(), radius * VALUE_LABEL_RADIUS, slice.mid_angle());
    svg::text(
        pos.x,
        pos.y,
        &format!("{:.1}%", slice.percentage),
        Attrs::new()
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("fill", "#fff")
            .set("font-weight", "bold")
            .set("font-size", "12px"),
    )
}

/// Leader line and outside label for one slice
fn category_label(slice: &PieSlice, radius: f64) -> [String; 2] {
    let mid = slice.mid_angle();
    let origin = Point::origin();
    let from = point_on_circle(origin, radius * LEADER_START_RADIUS, mid);
    let to = point_on_circle(origin, radius * LEADER_END_RADIUS, mid);
    let pos = point_on_circle(origin, radius * CATEGORY_LABEL_RADIUS, mid);

    // right half of the circle reads left-to-right away from the pie
    let anchor = if mid.cos() >= 0.0 { "start" } else { "end" };

    [
        svg::line(
            from.x,
            from.y,
            to.x,
            to.y,
            Attrs::new().set("stroke", "#333").set("stroke-width", 1),
        ),
        svg::text(
            pos.x,
            pos.y,
            &slice.label,
            Attrs::new()
                .set("text-anchor", anchor)
                .set("dominant-baseline", "middle")
                .set("font-size", "12px"),
        ),
    ]
}

/// Swatch, label and percentage per slice, stacked upward from the bottom margin
fn legend(config: &PieConfig, slices: &[PieSlice]) -> String {
    let base = &config.base;
    let x = base.margin.left;
    let bottom = base.height - base.margin.bottom;
    let count = slices.len();

    let mut entries = Vec::with_capacity(count * 2);
    for slice in slices {
        let y = bottom - (count - 1 - slice.index) as f64 * LEGEND_ROW_HEIGHT;
        entries.push(svg::rect(
            x,
            y - LEGEND_SWATCH_SIZE,
            LEGEND_SWATCH_SIZE,
            LEGEND_SWATCH_SIZE,
            Attrs::new().set("fill", &slice.color),
        ));
        entries.push(svg::text(
            x + LEGEND_SWATCH_SIZE + 6.0,
            y - 2.0,
            &format!("{} ({:.1}%)", slice.label, slice.percentage),
            Attrs::new().set("font-size", "12px"),
        ));
    }
    svg::group(Attrs::new().set("class", "legend"), &entries)
}

/// A pie chart holding its options and data between renders
#[derive(Debug, Clone, Default)]
pub struct PieChart {
    options: PieOptions,
    data: Vec<LabelValue>,
}

impl PieChart {
    pub fn new(options: PieOptions, data: Vec<LabelValue>) -> Self {
        Self { options, data }
    }

    pub fn options(&self) -> &PieOptions {
        &self.options
    }

    pub fn data(&self) -> &[LabelValue] {
        &self.data
    }

    /// Resolved options with defaults filled in
    pub fn config(&self) -> PieConfig {
        self.options.resolve()
    }

    /// Replace the dataset
    pub fn update_data(&mut self, data: Vec<LabelValue>) {
        self.data = data;
    }

    /// Merge the fields set in `patch` over the current options
    pub fn update_options(&mut self, patch: PieOptions) {
        self.options = std::mem::take(&mut self.options).merge(patch);
    }

    pub fn slices(&self) -> Result<Vec<PieSlice>, ChartError> {
        pie_slices(&self.config(), &self.data)
    }

    pub fn render(&self) -> Result<String, ChartError> {
        self.render_with(&SvgConfig::default())
    }

    pub fn render_with(&self, svg_config: &SvgConfig) -> Result<String, ChartError> {
        render_pie(&self.config(), &self.data, svg_config)
    }
}
