//! Path `d` attribute construction

use crate::geometry::Point;

/// A segment in a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Move to starting point
    MoveTo(Point),
    /// Straight line to point
    LineTo(Point),
    /// Circular arc to point
    ArcTo {
        end: Point,
        radius: f64,
        large_arc: bool,
        sweep: bool, // true = clockwise in SVG coordinates (y-down)
    },
    /// Close path back to start
    Close,
}

/// Path data built segment by segment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn arc_to(mut self, end: Point, radius: f64, large_arc: bool, sweep: bool) -> Self {
        self.segments.push(PathSegment::ArcTo {
            end,
            radius,
            large_arc,
            sweep,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        self.segments
            .iter()
            .map(|seg| match seg {
                PathSegment::MoveTo(p) => format!("M {},{}", coord(p.x), coord(p.y)),
                PathSegment::LineTo(p) => format!("L {},{}", coord(p.x), coord(p.y)),
                PathSegment::ArcTo {
                    end,
                    radius,
                    large_arc,
                    sweep,
                } => format!(
                    "A {r},{r} 0 {},{} {},{}",
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    coord(end.x),
                    coord(end.y),
                    r = coord(*radius),
                ),
                PathSegment::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Format a coordinate with two decimals, never as "-0.00"
fn coord(v: f64) -> String {
    let s = format!("{:.2}", v);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}
