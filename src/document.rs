//! Declarative chart documents
//!
//! A chart document is a TOML file naming the chart kind, its options and
//! its data points:
//!
//! ```toml
//! kind = "bar"
//!
//! [options]
//! width = 400
//! title = "Quarterly revenue"
//!
//! [[data]]
//! label = "Q1"
//! value = 120
//! ```
//!
//! Line charts take `x`/`y` data points instead of `label`/`value`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::chart::{
    BarChart, BarOptions, LabelValue, LineChart, LineOptions, PieChart, PieOptions, XyPoint,
};
use crate::error::ChartError;
use crate::renderer::SvgConfig;

/// Errors that can occur when loading or rendering chart documents
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read chart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse chart TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{kind} chart data must be {expected} pairs")]
    DataMismatch {
        kind: ChartKind,
        expected: &'static str,
    },
    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// The supported chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }

    /// A complete sample document for this chart kind
    pub fn sample(&self) -> &'static str {
        match self {
            ChartKind::Bar => include_str!("../samples/bar.toml"),
            ChartKind::Line => include_str!("../samples/line.toml"),
            ChartKind::Pie => include_str!("../samples/pie.toml"),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown chart kind '{}', expected bar, line or pie", s))
    }
}

/// TOML structure for deserializing chart documents
#[derive(Deserialize)]
struct TomlDocument {
    kind: ChartKind,
    #[serde(default)]
    options: toml::Table,
    #[serde(default)]
    data: Vec<TomlPoint>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlPoint {
    LabelValue(LabelValue),
    Xy(XyPoint),
}

/// A chart loaded from a document, ready to render
#[derive(Debug, Clone)]
pub enum ChartDocument {
    Bar(BarChart),
    Line(LineChart),
    Pie(PieChart),
}

impl ChartDocument {
    /// Load a chart document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a chart document from a TOML string
    pub fn from_str(content: &str) -> Result<Self, DocumentError> {
        let parsed: TomlDocument = toml::from_str(content)?;
        let options = toml::Value::Table(parsed.options);
        debug!(kind = %parsed.kind, points = parsed.data.len(), "loaded chart document");

        let doc = match parsed.kind {
            ChartKind::Bar => {
                let data = label_values(parsed.kind, parsed.data)?;
                ChartDocument::Bar(BarChart::new(BarOptions::deserialize(options)?, data))
            }
            ChartKind::Line => {
                let data = xy_points(parsed.kind, parsed.data)?;
                ChartDocument::Line(LineChart::new(LineOptions::deserialize(options)?, data))
            }
            ChartKind::Pie => {
                let data = label_values(parsed.kind, parsed.data)?;
                ChartDocument::Pie(PieChart::new(PieOptions::deserialize(options)?, data))
            }
        };
        Ok(doc)
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartDocument::Bar(_) => ChartKind::Bar,
            ChartDocument::Line(_) => ChartKind::Line,
            ChartDocument::Pie(_) => ChartKind::Pie,
        }
    }

    /// Render the chart to an SVG document string
    pub fn render(&self, svg_config: &SvgConfig) -> Result<String, DocumentError> {
        let svg = match self {
            ChartDocument::Bar(chart) => chart.render_with(svg_config),
            ChartDocument::Line(chart) => chart.render_with(svg_config),
            ChartDocument::Pie(chart) => chart.render_with(svg_config)?,
        };
        Ok(svg)
    }
}

fn label_values(kind: ChartKind, points: Vec<TomlPoint>) -> Result<Vec<LabelValue>, DocumentError> {
    points
        .into_iter()
        .map(|p| match p {
            TomlPoint::LabelValue(lv) => Ok(lv),
            TomlPoint::Xy(_) => Err(DocumentError::DataMismatch {
                kind,
                expected: "label/value",
            }),
        })
        .collect()
}

fn xy_points(kind: ChartKind, points: Vec<TomlPoint>) -> Result<Vec<XyPoint>, DocumentError> {
    points
        .into_iter()
        .map(|p| match p {
            TomlPoint::Xy(xy) => Ok(xy),
            TomlPoint::LabelValue(_) => Err(DocumentError::DataMismatch {
                kind,
                expected: "x/y",
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bar_document() {
        let toml_str = r##"
kind = "bar"

[options]
width = 400
height = 300
title = "Sales"
bar_padding = 0.3

[[data]]
label = "A"
value = 10

[[data]]
label = "B"
value = 20.5
"##;
        let doc = ChartDocument::from_str(toml_str).expect("Should parse");
        assert_eq!(doc.kind(), ChartKind::Bar);
        let ChartDocument::Bar(chart) = doc else {
            panic!("expected bar chart");
        };
        let config = chart.config();
        assert_eq!(config.base.width, 400.0);
        assert_eq!(config.base.title.as_deref(), Some("Sales"));
        assert_eq!(config.bar_padding, 0.3);
        assert_eq!(chart.data()[1], LabelValue::new("B", 20.5));
    }

    #[test]
    fn test_parse_line_document_without_options() {
        let toml_str = r##"
kind = "line"
data = [{ x = 1, y = 2 }, { x = 2, y = 3.5 }]
"##;
        let doc = ChartDocument::from_str(toml_str).expect("Should parse");
        let ChartDocument::Line(chart) = doc else {
            panic!("expected line chart");
        };
        assert_eq!(chart.data(), &[XyPoint::new(1.0, 2.0), XyPoint::new(2.0, 3.5)]);
        assert_eq!(chart.config().base.width, 600.0);
    }

    #[test]
    fn test_mismatched_data_is_rejected() {
        let toml_str = r##"
kind = "pie"
data = [{ x = 1, y = 2 }]
"##;
        let err = ChartDocument::from_str(toml_str).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::DataMismatch {
                kind: ChartKind::Pie,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = ChartDocument::from_str(r#"kind = "radar""#).unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn test_chart_kind_from_str() {
        assert_eq!("bar".parse::<ChartKind>(), Ok(ChartKind::Bar));
        assert_eq!("PIE".parse::<ChartKind>(), Ok(ChartKind::Pie));
        assert!("radar".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = ChartDocument::from_str("this is not valid toml {{{{");
        assert!(result.is_err());
    }

    #[test]
    fn test_samples_parse_and_render() {
        for kind in ChartKind::ALL {
            let doc = ChartDocument::from_str(kind.sample()).expect("sample should parse");
            assert_eq!(doc.kind(), kind);
            let svg = doc.render(&SvgConfig::default()).expect("sample should render");
            assert!(svg.starts_with("<svg"));
            assert!(svg.contains(&format!("Sample {} Chart", capitalize(kind.name()))));
        }
    }

    fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[test]
    fn test_pie_zero_total_surfaces_chart_error() {
        let toml_str = r##"
kind = "pie"
data = [{ label = "A", value = 0 }]
"##;
        let doc = ChartDocument::from_str(toml_str).expect("Should parse");
        let err = doc.render(&SvgConfig::default()).unwrap_err();
        assert!(matches!(err, DocumentError::Chart(ChartError::ZeroTotal)));
    }
}
