//! Data points accepted by the chart renderers

use serde::Deserialize;

/// A categorical data point, used by bar and pie charts
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelValue {
    pub label: String,
    pub value: f64,
}

impl LabelValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A numeric coordinate pair, used by line charts
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
}

impl XyPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(&str, f64)> for LabelValue {
    fn from((label, value): (&str, f64)) -> Self {
        Self::new(label, value)
    }
}

impl From<(f64, f64)> for XyPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
