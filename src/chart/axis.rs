//! Shared handling for charts with two perpendicular numeric axes

use crate::geometry::{calculate_ticks, find_min_max, format_number, map_range, PlotArea};
use crate::renderer::svg::{self, Attrs};

pub const AXIS_STROKE: &str = "#333";
pub const GRID_STROKE: &str = "#ddd";
pub const TICK_LENGTH: f64 = 5.0;

/// Distance between an axis and its caption
const CAPTION_OFFSET: f64 = 40.0;

/// Resolved axis options
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    pub show_axes: bool,
    pub show_grid: bool,
    pub y_ticks: usize,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

/// The data-space extent an axis spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// The raw extent of `values`
    pub fn exact(values: &[f64]) -> Self {
        let (min, max) = find_min_max(values);
        Self { min, max }
    }

    /// Extent of `values` with the maximum inflated by `padding` (0.1 = 10%)
    ///
    /// With `from_zero` the range always includes zero, so bars and areas
    /// have a visible baseline.
    pub fn padded(values: &[f64], padding: f64, from_zero: bool) -> Self {
        let (mut min, mut max) = find_min_max(values);
        if from_zero {
            min = min.min(0.0);
            max = max.max(0.0);
        }
        max += max.abs() * padding;
        Self { min, max }
    }

    /// Map a data value onto `[to_min, to_max]`
    pub fn map(&self, value: f64, to_min: f64, to_max: f64) -> f64 {
        map_range(value, self.min, self.max, to_min, to_max)
    }

    /// Map a data value onto the vertical extent of `area` (bottom = min)
    pub fn map_y(&self, value: f64, area: &PlotArea) -> f64 {
        self.map(value, area.bottom(), area.y)
    }

    /// Map a data value onto the horizontal extent of `area` (left = min)
    pub fn map_x(&self, value: f64, area: &PlotArea) -> f64 {
        self.map(value, area.x, area.right())
    }

    pub fn ticks(&self, target_count: usize) -> Vec<f64> {
        calculate_ticks(self.min, self.max, target_count)
    }
}

/// A tick value and its screen coordinate along the axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub position: f64,
}

/// Value-axis ticks whose y position falls inside the plotting height
pub fn visible_y_ticks(bounds: &ValueBounds, target_count: usize, area: &PlotArea) -> Vec<TickMark> {
    bounds
        .ticks(target_count)
        .into_iter()
        .map(|value| TickMark {
            value,
            position: bounds.map_y(value, area),
        })
        .filter(|tick| area.contains_y(tick.position))
        .collect()
}

/// Category/x-axis ticks whose x position falls inside the plotting width
pub fn visible_x_ticks(bounds: &ValueBounds, target_count: usize, area: &PlotArea) -> Vec<TickMark> {
    bounds
        .ticks(target_count)
        .into_iter()
        .map(|value| TickMark {
            value,
            position: bounds.map_x(value, area),
        })
        .filter(|tick| tick.position >= area.x && tick.position <= area.right())
        .collect()
}

/// Y position of the topmost visible tick, or the plot bottom if none is visible
pub fn top_tick_y(ticks: &[TickMark], area: &PlotArea) -> f64 {
    ticks
        .iter()
        .map(|t| t.position)
        .fold(area.bottom(), f64::min)
}

fn axis_attrs() -> Attrs {
    Attrs::new()
        .set("stroke", AXIS_STROKE)
        .set("stroke-width", 1)
}

/// Horizontal axis line at `y` spanning the plot width
pub fn x_axis_line(area: &PlotArea, y: f64) -> String {
    svg::line(area.x, y, area.right(), y, axis_attrs())
}

/// Vertical axis with tick marks and labels on the left edge of the plot
///
/// The axis line stops at the topmost visible tick instead of running the
/// full plot height.
pub fn y_axis(ticks: &[TickMark], area: &PlotArea) -> Vec<String> {
    let mut out = Vec::with_capacity(ticks.len() * 2 + 1);
    for tick in ticks {
        out.push(svg::line(
            area.x - TICK_LENGTH,
            tick.position,
            area.x,
            tick.position,
            axis_attrs(),
        ));
        out.push(svg::text(
            area.x - 2.0 * TICK_LENGTH,
            tick.position,
            &format_number(tick.value),
            Attrs::new()
                .set("text-anchor", "end")
                .set("dominant-baseline", "middle")
                .set("font-size", "12px"),
        ));
    }
    out.push(svg::line(
        area.x,
        area.bottom(),
        area.x,
        top_tick_y(ticks, area),
        axis_attrs(),
    ));
    out
}

/// Tick marks and labels below the bottom edge of the plot
pub fn x_axis_ticks(ticks: &[TickMark], area: &PlotArea) -> Vec<String> {
    let mut out = Vec::with_capacity(ticks.len() * 2);
    for tick in ticks {
        out.push(svg::line(
            tick.position,
            area.bottom(),
            tick.position,
            area.bottom() + TICK_LENGTH,
            axis_attrs(),
        ));
        out.push(svg::text(
            tick.position,
            area.bottom() + 4.0 * TICK_LENGTH,
            &format_number(tick.value),
            Attrs::new()
                .set("text-anchor", "middle")
                .set("font-size", "12px"),
        ));
    }
    out
}

/// Horizontal grid lines at each value tick
pub fn horizontal_grid(ticks: &[TickMark], area: &PlotArea, dashed: bool) -> Vec<String> {
    ticks
        .iter()
        .map(|tick| {
            let attrs = grid_attrs(dashed);
            svg::line(area.x, tick.position, area.right(), tick.position, attrs)
        })
        .collect()
}

/// Vertical grid lines at each x tick
pub fn vertical_grid(ticks: &[TickMark], area: &PlotArea, dashed: bool) -> Vec<String> {
    ticks
        .iter()
        .map(|tick| {
            let attrs = grid_attrs(dashed);
            svg::line(tick.position, area.y, tick.position, area.bottom(), attrs)
        })
        .collect()
}

fn grid_attrs(dashed: bool) -> Attrs {
    let attrs = Attrs::new()
        .set("stroke", GRID_STROKE)
        .set("stroke-width", 1);
    if dashed {
        attrs.set("stroke-dasharray", "4 4")
    } else {
        attrs
    }
}

/// Axis captions: x centered below the plot, y rotated along the left edge
pub fn axis_captions(axis: &AxisConfig, area: &PlotArea) -> Vec<String> {
    let mut out = vec![];
    if let Some(label) = &axis.x_label {
        out.push(svg::text(
            area.center().x,
            area.bottom() + CAPTION_OFFSET,
            label,
            Attrs::new()
                .set("text-anchor", "middle")
                .set("font-size", "14px"),
        ));
    }
    if let Some(label) = &axis.y_label {
        let x = area.x - CAPTION_OFFSET;
        let y = area.center().y;
        out.push(svg::text(
            x,
            y,
            label,
            Attrs::new()
                .set("text-anchor", "middle")
                .set("transform", format!("rotate(-90 {} {})", x, y))
                .set("font-size", "14px"),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea::new(40.0, 20.0, 340.0, 220.0)
    }

    #[test]
    fn test_padded_bounds_clamp_min_to_zero() {
        let bounds = ValueBounds::padded(&[10.0, 20.0, 15.0], 0.1, true);
        assert_eq!(bounds.min, 0.0);
        assert!((bounds.max - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_bounds_keep_negative_min() {
        let bounds = ValueBounds::padded(&[-5.0, 10.0], 0.1, true);
        assert_eq!(bounds.min, -5.0);
        assert!((bounds.max - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_padded_bounds_all_negative_include_zero() {
        let bounds = ValueBounds::padded(&[-5.0, -2.0], 0.1, true);
        assert_eq!(bounds.min, -5.0);
        assert_eq!(bounds.max, 0.0);
    }

    #[test]
    fn test_padded_bounds_without_zero_clamp() {
        let bounds = ValueBounds::padded(&[2.0, 10.0], 0.1, false);
        assert_eq!(bounds.min, 2.0);
        assert!((bounds.max - 11.0).abs() < 1e-9);

        let bounds = ValueBounds::padded(&[-8.0, -4.0], 0.5, false);
        assert_eq!(bounds.max, -2.0);
    }

    #[test]
    fn test_exact_bounds() {
        let bounds = ValueBounds::exact(&[3.0, 1.0, 2.0]);
        assert_eq!(bounds, ValueBounds { min: 1.0, max: 3.0 });
    }

    #[test]
    fn test_map_y_inverts() {
        let bounds = ValueBounds { min: 0.0, max: 22.0 };
        let area = area();
        assert_eq!(bounds.map_y(0.0, &area), area.bottom());
        assert_eq!(bounds.map_y(22.0, &area), area.y);
    }

    #[test]
    fn test_visible_ticks_drop_ticks_above_plot() {
        // ticks run 0..25 but the range stops at 22
        let bounds = ValueBounds { min: 0.0, max: 22.0 };
        let ticks = visible_y_ticks(&bounds, 5, &area());
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_top_tick_y() {
        let bounds = ValueBounds { min: 0.0, max: 22.0 };
        let area = area();
        let ticks = visible_y_ticks(&bounds, 5, &area);
        let expected = bounds.map_y(20.0, &area);
        assert_eq!(top_tick_y(&ticks, &area), expected);
        assert_eq!(top_tick_y(&[], &area), area.bottom());
    }

    #[test]
    fn test_y_axis_elements() {
        let bounds = ValueBounds { min: 0.0, max: 22.0 };
        let area = area();
        let ticks = visible_y_ticks(&bounds, 5, &area);
        let markup = y_axis(&ticks, &area).concat();
        // one tick mark per tick plus the axis line
        assert_eq!(markup.matches("<line").count(), ticks.len() + 1);
        assert!(markup.contains(">20</text>"));
        assert!(markup.contains(">5.0</text>"));
    }

    #[test]
    fn test_grid_dashing() {
        let ticks = [TickMark {
            value: 1.0,
            position: 50.0,
        }];
        let dashed = horizontal_grid(&ticks, &area(), true).concat();
        assert!(dashed.contains(r#"stroke-dasharray="4 4""#));
        let solid = vertical_grid(&ticks, &area(), false).concat();
        assert!(!solid.contains("stroke-dasharray"));
        assert!(solid.contains(r##"stroke="#ddd""##));
    }

    #[test]
    fn test_axis_captions() {
        let axis = AxisConfig {
            show_axes: true,
            show_grid: true,
            y_ticks: 5,
            x_label: Some("Month".to_string()),
            y_label: Some("Revenue".to_string()),
        };
        let captions = axis_captions(&axis, &area());
        assert_eq!(captions.len(), 2);
        assert!(captions[1].contains("rotate(-90 0 130)"));
    }
}
