//! SVG Charts - bar, line and pie charts rendered to SVG markup
//!
//! This library turns small datasets into self-contained SVG documents. Each
//! chart type is a pure function of its options and data, so the same input
//! always produces the same markup.
//!
//! # Example
//!
//! ```rust
//! use svg_charts::{BarChart, BarOptions, BaseOptions, LabelValue};
//!
//! let chart = BarChart::new(
//!     BarOptions::new().with_base(BaseOptions::new().with_title("Sales")),
//!     vec![LabelValue::new("Q1", 10.0), LabelValue::new("Q2", 20.0)],
//! );
//!
//! let svg = chart.render();
//! assert!(svg.contains("<svg"));
//! assert_eq!(svg.matches(r#"class="bar""#).count(), 2);
//! ```

pub mod chart;
pub mod document;
pub mod error;
pub mod geometry;
pub mod renderer;

pub use chart::{
    bar_marks, pie_slices, render_bar, render_line, render_pie, AxisOptions, BarChart, BarConfig,
    BarMark, BarOptions, BaseOptions, LabelValue, LineChart, LineConfig, LineOptions, Margin,
    PieChart, PieConfig, PieOptions, PieSlice, XyPoint,
};
pub use document::{ChartDocument, ChartKind, DocumentError};
pub use error::ChartError;
pub use renderer::SvgConfig;

/// Render a chart document (TOML) to SVG with default output settings
///
/// # Example
///
/// ```rust
/// let svg = svg_charts::render_document(r#"
///     kind = "pie"
///     data = [{ label = "A", value = 1 }, { label = "B", value = 3 }]
/// "#).unwrap();
///
/// assert_eq!(svg.matches(r#"class="slice""#).count(), 2);
/// ```
pub fn render_document(source: &str) -> Result<String, DocumentError> {
    render_document_with_config(source, &SvgConfig::default())
}

/// Render a chart document (TOML) to SVG with custom output settings
pub fn render_document_with_config(
    source: &str,
    svg_config: &SvgConfig,
) -> Result<String, DocumentError> {
    ChartDocument::from_str(source)?.render(svg_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_document() {
        let svg = render_document(
            r#"
            kind = "bar"
            data = [{ label = "a", value = 1 }, { label = "b", value = 2 }]
        "#,
        )
        .unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 2);
    }

    #[test]
    fn test_render_document_standalone() {
        let svg = render_document_with_config(
            r#"kind = "line""#,
            &SvgConfig::new().with_standalone(true),
        )
        .unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(chart::EMPTY_MESSAGE));
    }

    #[test]
    fn test_render_document_parse_error() {
        let result = render_document("kind = ");
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_render_document_chart_error() {
        let result = render_document(
            r#"
            kind = "pie"
            data = [{ label = "neg", value = -1 }]
        "#,
        );
        assert!(matches!(
            result,
            Err(DocumentError::Chart(ChartError::InvalidSliceValue { .. }))
        ));
    }
}
