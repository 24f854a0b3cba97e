//! Partial option records and their defaults
//!
//! Every option record here has all fields optional. It is what users write
//! (in code or in a chart document) and what `update_options` merges: fields
//! set in the patch replace the current ones, unset fields are kept. Rendering
//! never reads these directly; each record resolves into a config value with
//! every default filled in.

use serde::Deserialize;

use crate::geometry::MAX_TICK_TARGET;

use super::axis::AxisConfig;
use super::base::BaseConfig;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 400.0;
pub const DEFAULT_Y_TICKS: usize = 5;

/// Default palette (blue, red, yellow, green, orange)
pub const DEFAULT_COLORS: [&str; 5] = ["#4285F4", "#EA4335", "#FBBC05", "#34A853", "#FF6D01"];

/// Space between the canvas edge and the inner plotting area
///
/// Sides left out of a chart document keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(40.0, 30.0, 50.0, 50.0)
    }
}

/// Options shared by every chart type
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BaseOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<Margin>,
    pub title: Option<String>,
    pub colors: Option<Vec<String>>,
    /// Class attribute for the root `<svg>` element
    pub class_name: Option<String>,
}

impl BaseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Shallow-merge `patch` over these options
    pub fn merge(self, patch: BaseOptions) -> Self {
        Self {
            width: patch.width.or(self.width),
            height: patch.height.or(self.height),
            margin: patch.margin.or(self.margin),
            title: patch.title.or(self.title),
            colors: patch.colors.or(self.colors),
            class_name: patch.class_name.or(self.class_name),
        }
    }

    /// Fill in defaults
    pub fn resolve(&self) -> BaseConfig {
        let colors = match &self.colors {
            Some(colors) if !colors.is_empty() => colors.clone(),
            _ => DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        };

        BaseConfig {
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            height: self.height.unwrap_or(DEFAULT_HEIGHT),
            margin: self.margin.unwrap_or_default(),
            title: self.title.clone().filter(|t| !t.is_empty()),
            colors,
            class_name: self.class_name.clone(),
        }
    }
}

/// Options for charts with two perpendicular numeric axes
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    pub show_axes: Option<bool>,
    pub show_grid: Option<bool>,
    /// Target number of ticks on the value axis
    pub y_ticks: Option<usize>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl AxisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axes(mut self, show: bool) -> Self {
        self.show_axes = Some(show);
        self
    }

    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = Some(show);
        self
    }

    pub fn with_y_ticks(mut self, count: usize) -> Self {
        self.y_ticks = Some(count);
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    /// Shallow-merge `patch` over these options
    pub fn merge(self, patch: AxisOptions) -> Self {
        Self {
            show_axes: patch.show_axes.or(self.show_axes),
            show_grid: patch.show_grid.or(self.show_grid),
            y_ticks: patch.y_ticks.or(self.y_ticks),
            x_label: patch.x_label.or(self.x_label),
            y_label: patch.y_label.or(self.y_label),
        }
    }

    /// Fill in defaults
    pub fn resolve(&self) -> AxisConfig {
        AxisConfig {
            show_axes: self.show_axes.unwrap_or(true),
            show_grid: self.show_grid.unwrap_or(true),
            y_ticks: self.y_ticks.unwrap_or(DEFAULT_Y_TICKS).min(MAX_TICK_TARGET),
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_defaults() {
        let config = BaseOptions::default().resolve();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.margin, Margin::new(40.0, 30.0, 50.0, 50.0));
        assert_eq!(config.colors.len(), 5);
        assert_eq!(config.colors[0], "#4285F4");
        assert_eq!(config.title, None);
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        let config = BaseOptions::new()
            .with_colors(Vec::<String>::new())
            .resolve();
        assert_eq!(config.colors.len(), DEFAULT_COLORS.len());
    }

    #[test]
    fn test_empty_title_is_dropped() {
        let config = BaseOptions::new().with_title("").resolve();
        assert_eq!(config.title, None);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let current = BaseOptions::new()
            .with_size(400.0, 300.0)
            .with_title("Sales");
        let patch = BaseOptions {
            height: Some(500.0),
            ..Default::default()
        };
        let merged = current.merge(patch);
        assert_eq!(merged.width, Some(400.0));
        assert_eq!(merged.height, Some(500.0));
        assert_eq!(merged.title.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_axis_defaults() {
        let config = AxisOptions::default().resolve();
        assert!(config.show_axes);
        assert!(config.show_grid);
        assert_eq!(config.y_ticks, 5);
        assert_eq!(config.x_label, None);
    }

    #[test]
    fn test_axis_merge() {
        let merged = AxisOptions::new()
            .with_grid(false)
            .merge(AxisOptions::new().with_y_ticks(8));
        assert_eq!(merged.show_grid, Some(false));
        assert_eq!(merged.y_ticks, Some(8));
    }

    #[test]
    fn test_tick_target_is_capped() {
        let config = AxisOptions::new().with_y_ticks(usize::MAX).resolve();
        assert_eq!(config.y_ticks, MAX_TICK_TARGET);
    }

    #[test]
    fn test_partial_margin_keeps_default_sides() {
        let base: BaseOptions = toml::from_str("margin = { top = 10 }").unwrap();
        assert_eq!(base.resolve().margin, Margin::new(10.0, 30.0, 50.0, 50.0));
    }
}
