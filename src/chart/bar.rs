//! Bar chart rendering

use serde::Deserialize;
use tracing::debug;

use crate::geometry::{format_number, PlotArea};
use crate::renderer::svg::{self, Attrs};
use crate::renderer::SvgConfig;

use super::axis::{self, AxisConfig, ValueBounds};
use super::base::BaseConfig;
use super::data::LabelValue;
use super::options::{AxisOptions, BaseOptions};

/// Category labels are rotated once there are more bars than this
const ROTATE_LABELS_ABOVE: usize = 10;

/// Partial bar chart options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BarOptions {
    #[serde(flatten)]
    pub base: BaseOptions,
    #[serde(flatten)]
    pub axis: AxisOptions,
    /// Fraction of each slot left empty around its bar
    pub bar_padding: Option<f64>,
    /// Draw the numeric value next to each bar
    pub show_values: Option<bool>,
    /// Draw the category label under each bar
    pub show_labels: Option<bool>,
    /// Headroom added above the largest value (0.1 = 10%)
    pub value_padding: Option<f64>,
}

impl BarOptions {
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

    pub fn with_bar_padding(mut self, padding: f64) -> Self {
        self.bar_padding = Some(padding);
        self
    }

    pub fn with_values(mut self, show: bool) -> Self {
        self.show_values = Some(show);
        self
    }

    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = Some(show);
        self
    }

    /// Shallow-merge `patch` over these options
    pub fn merge(self, patch: BarOptions) -> Self {
        Self {
            base: self.base.merge(patch.base),
            axis: self.axis.merge(patch.axis),
            bar_padding: patch.bar_padding.or(self.bar_padding),
            show_values: patch.show_values.or(self.show_values),
            show_labels: patch.show_labels.or(self.show_labels),
            value_padding: patch.value_padding.or(self.value_padding),
        }
    }

    /// Fill in defaults
    pub fn resolve(&self) -> BarConfig {
        BarConfig {
            base: self.base.resolve(),
            axis: self.axis.resolve(),
            bar_padding: self.bar_padding.unwrap_or(0.2).clamp(0.0, 0.95),
            show_values: self.show_values.unwrap_or(true),
            show_labels: self.show_labels.unwrap_or(true),
            value_padding: self.value_padding.unwrap_or(0.1).max(0.0),
        }
    }
}

/// Resolved bar chart options
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    pub base: BaseConfig,
    pub axis: AxisConfig,
    pub bar_padding: f64,
    pub show_values: bool,
    pub show_labels: bool,
    pub value_padding: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        BarOptions::default().resolve()
    }
}

/// Geometry and metadata of one rendered bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub color: String,
    pub bounds: PlotArea,
    /// Horizontal center of the bar's slot
    pub center_x: f64,
}

/// Shared geometry for one render pass
struct BarLayout {
    area: PlotArea,
    bounds: ValueBounds,
    baseline: f64,
    slot_width: f64,
}

impl BarLayout {
    fn new(config: &BarConfig, data: &[LabelValue]) -> Self {
        let area = config.base.inner_area();
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let bounds = ValueBounds::padded(&values, config.value_padding, true);
        let baseline = bounds.map_y(0.0, &area);
        let slot_width = if data.is_empty() {
            0.0
        } else {
            area.width / data.len() as f64
        };

        Self {
            area,
            bounds,
            baseline,
            slot_width,
        }
    }

    fn slot_center(&self, index: usize) -> f64 {
        self.area.x + (index as f64 + 0.5) * self.slot_width
    }

    fn mark(&self, config: &BarConfig, index: usize, point: &LabelValue) -> BarMark {
        let bar_width = self.slot_width * (1.0 - config.bar_padding);
        let x = self.area.x + index as f64 * self.slot_width + (self.slot_width - bar_width) / 2.0;

        // positive bars grow up from the baseline, negative bars grow down
        let end = self.bounds.map_y(point.value, &self.area);
        let (y, height) = if point.value >= 0.0 {
            (end, self.baseline - end)
        } else {
            (self.baseline, end - self.baseline)
        };

        BarMark {
            index,
            label: point.label.clone(),
            value: point.value,
            color: config.base.color(index).to_string(),
            bounds: PlotArea::new(x, y, bar_width, height),
            center_x: self.slot_center(index),
        }
    }
}

/// Compute the bar geometry without rendering it
///
/// Exposes index, label, value and color per bar for callers that attach
/// interactivity to the rendered markup.
pub fn bar_marks(config: &BarConfig, data: &[LabelValue]) -> Vec<BarMark> {
    let layout = BarLayout::new(config, data);
    data.iter()
        .enumerate()
        .map(|(i, point)| layout.mark(config, i, point))
        .collect()
}

/// Render a bar chart to an SVG document string
pub fn render_bar(config: &BarConfig, data: &[LabelValue], svg_config: &SvgConfig) -> String {
    if data.is_empty() {
        debug!("bar chart has no data, rendering placeholder");
        return config.base.render_empty(svg_config);
    }
    debug!(bars = data.len(), "rendering bar chart");

    let layout = BarLayout::new(config, data);
    let marks: Vec<BarMark> = data
        .iter()
        .enumerate()
        .map(|(i, point)| layout.mark(config, i, point))
        .collect();

    let mut doc = config.base.document(svg_config);
    doc.extend(config.base.title_markup());

    let ticks = axis::visible_y_ticks(&layout.bounds, config.axis.y_ticks, &layout.area);
    if config.axis.show_grid {
        doc.extend(axis::horizontal_grid(&ticks, &layout.area, true));
    }
    if config.axis.show_axes {
        doc.push(axis::x_axis_line(&layout.area, layout.baseline));
        doc.extend(axis::y_axis(&ticks, &layout.area));
        doc.extend(axis::axis_captions(&config.axis, &layout.area));
    }

    doc.push(render_bars(&marks));
    if config.show_labels {
        doc.push(render_category_labels(&marks, &layout.area));
    }
    if config.show_values {
        doc.push(render_value_labels(&marks));
    }

    doc.build()
}

fn render_bars(marks: &[BarMark]) -> String {
    let bars: Vec<String> = marks
        .iter()
        .map(|mark| {
            svg::rect(
                mark.bounds.x,
                mark.bounds.y,
                mark.bounds.width,
                mark.bounds.height,
                Attrs::new()
                    .set("class", "bar")
                    .set("fill", &mark.color)
                    .set("stroke", "none")
                    .set("data-index", mark.index)
                    .set("data-label", &mark.label)
                    .set("data-value", mark.value),
            )
        })
        .collect();
    svg::group(Attrs::new().set("class", "bars"), &bars)
}

fn render_category_labels(marks: &[BarMark], area: &PlotArea) -> String {
    let rotate = marks.len() > ROTATE_LABELS_ABOVE;
    let y = area.bottom() + 20.0;

    let labels: Vec<String> = marks
        .iter()
        .map(|mark| {
            let x = mark.center_x;
            let mut attrs = Attrs::new()
                .set("text-anchor", "middle")
                .set("font-size", "12px");
            if rotate {
                attrs = attrs
                    .set("transform", format!("rotate(-45 {} {})", x, y))
                    .set("text-anchor", "end");
            }
            svg::text(x, y, &mark.label, attrs)
        })
        .collect();
    svg::group(Attrs::new().set("class", "category-labels"), &labels)
}

fn render_value_labels(marks: &[BarMark]) -> String {
    let labels: Vec<String> = marks
        .iter()
        .map(|mark| {
            let y = if mark.value >= 0.0 {
                mark.bounds.y - 5.0
            } else {
                mark.bounds.bottom() + 15.0
            };
            svg::text(
                mark.center_x,
                y,
                &format_number(mark.value),
                Attrs::new()
                    .set("text-anchor", "middle")
                    .set("font-size", "12px")
                    .set("fill", "#333")
                    .set("font-weight", "bold"),
            )
        })
        .collect();
    svg::group(Attrs::new().set("class", "value-labels"), &labels)
}

/// A bar chart holding its options and data between renders
#[derive(Debug, Clone, Default)]
pub struct BarChart {
    options: BarOptions,
    data: Vec<LabelValue>,
}

impl BarChart {
    pub fn new(options: BarOptions, data: Vec<LabelValue>) -> Self {
        Self { options, data }
    }

    pub fn options(&self) -> &BarOptions {
        &self.options
    }

    pub fn data(&self) -> &[LabelValue] {
        &self.data
    }

    /// Resolved options with defaults filled in
    pub fn config(&self) -> BarConfig {
        self.options.resolve()
    }

    /// Replace the dataset
    pub fn update_data(&mut self, data: Vec<LabelValue>) {
        self.data = data;
    }

    /// Merge the fields set in `patch` over the current options
    pub fn update_options(&mut self, patch: BarOptions) {
        self.options = std::mem::take(&mut self.options).merge(patch);
    }

    pub fn marks(&self) -> Vec<BarMark> {
        bar_marks(&self.config(), &self.data)
    }

    pub fn render(&self) -> String {
        self.render_with(&SvgConfig::default())
    }

    pub fn render_with(&self, svg_config: &SvgConfig) -> String {
        render_bar(&self.config(), &self.data, svg_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::options::Margin;

    fn sample() -> Vec<LabelValue> {
        vec![
            LabelValue::new("A", 10.0),
            LabelValue::new("B", 20.0),
            LabelValue::new("C", 15.0),
        ]
    }

    fn config() -> BarConfig {
        BarOptions::new()
            .with_base(
                BaseOptions::new()
                    .with_size(400.0, 300.0)
                    .with_margin(Margin::new(20.0, 20.0, 40.0, 40.0)),
            )
            .resolve()
    }

    #[test]
    fn test_defaults() {
        let config = BarConfig::default();
        assert_eq!(config.bar_padding, 0.2);
        assert!(config.show_values);
        assert!(config.show_labels);
        assert!(config.axis.show_grid);
    }

    #[test]
    fn test_slot_partitioning() {
        let marks = bar_marks(&config(), &sample());
        // plot width 340 split into three slots
        let slot = 340.0 / 3.0;
        for (i, mark) in marks.iter().enumerate() {
            assert!((mark.bounds.width - slot * 0.8).abs() < 1e-9);
            let expected_x = 40.0 + i as f64 * slot + slot * 0.1;
            assert!((mark.bounds.x - expected_x).abs() < 1e-9);
            assert!((mark.center_x - (40.0 + (i as f64 + 0.5) * slot)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_heights_proportional_to_padded_max() {
        let marks = bar_marks(&config(), &sample());
        let plot_height = 240.0;
        for mark in &marks {
            let expected = mark.value / 22.0 * plot_height;
            assert!((mark.bounds.height - expected).abs() < 1e-9);
            assert!((mark.bounds.bottom() - 260.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_bar_grows_down_from_baseline() {
        let data = vec![LabelValue::new("up", 10.0), LabelValue::new("down", -5.0)];
        let marks = bar_marks(&config(), &data);
        let baseline = marks[0].bounds.bottom();
        assert!((marks[1].bounds.y - baseline).abs() < 1e-9);
        // the minimum value reaches the bottom of the plot
        assert!((marks[1].bounds.bottom() - 260.0).abs() < 1e-9);
        assert!(marks[1].bounds.height > 0.0);
    }

    #[test]
    fn test_update_options_merges() {
        let mut chart = BarChart::new(BarOptions::new().with_bar_padding(0.5), sample());
        chart.update_options(BarOptions::new().with_values(false));
        let config = chart.config();
        assert_eq!(config.bar_padding, 0.5);
        assert!(!config.show_values);
    }

    #[test]
    fn test_marks_carry_palette_colors() {
        let marks = bar_marks(&config(), &sample());
        let colors: Vec<&str> = marks.iter().map(|m| m.color.as_str()).collect();
        assert_eq!(colors, vec!["#4285F4", "#EA4335", "#FBBC05"]);
    }
}
