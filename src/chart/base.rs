//! Behavior shared by every chart type: canvas, title, plotting area,
//! empty state and palette cycling

use crate::geometry::PlotArea;
use crate::renderer::svg::{self, Attrs};
use crate::renderer::{SvgConfig, SvgDocument};

use super::options::Margin;

pub const EMPTY_MESSAGE: &str = "No data to display";

/// Resolved options shared by every chart type
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub title: Option<String>,
    /// Never empty once resolved
    pub colors: Vec<String>,
    pub class_name: Option<String>,
}

impl BaseConfig {
    /// Start a document sized to the canvas
    pub fn document(&self, svg: &SvgConfig) -> SvgDocument {
        SvgDocument::new(self.width, self.height, svg.clone())
            .with_class(self.class_name.as_deref())
    }

    /// Centered bold title in the top margin, if a title is set
    pub fn title_markup(&self) -> Option<String> {
        let title = self.title.as_deref()?;
        Some(svg::text(
            self.width / 2.0,
            self.margin.top / 2.0,
            title,
            Attrs::new()
                .set("class", "chart-title")
                .set("text-anchor", "middle")
                .set("font-weight", "bold")
                .set("font-size", "16px"),
        ))
    }

    /// The canvas minus margins
    pub fn inner_area(&self) -> PlotArea {
        PlotArea::new(
            self.margin.left,
            self.margin.top,
            self.width - self.margin.left - self.margin.right,
            self.height - self.margin.top - self.margin.bottom,
        )
    }

    /// Centered placeholder shown instead of plot geometry
    pub fn empty_state(&self) -> String {
        svg::text(
            self.width / 2.0,
            self.height / 2.0,
            EMPTY_MESSAGE,
            Attrs::new()
                .set("text-anchor", "middle")
                .set("dominant-baseline", "middle")
                .set("font-size", "16px")
                .set("fill", "#666"),
        )
    }

    /// Complete document for an empty dataset: canvas and placeholder only
    pub fn render_empty(&self, svg: &SvgConfig) -> String {
        let mut doc = self.document(svg);
        doc.push(self.empty_state());
        doc.build()
    }

    /// Palette color for the mark at `index`, cycling through the palette
    pub fn color(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return "#000";
        }
        &self.colors[index % self.colors.len()]
    }
}
