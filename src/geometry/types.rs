//! Core geometric types shared by the chart renderers

/// A 2D point in SVG user space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0)
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// An axis-aligned rectangle, used for the inner plotting area and bar marks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the area
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if a y-coordinate lies within the vertical extent (edges inclusive)
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y && y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_area_edges() {
        let area = PlotArea::new(50.0, 40.0, 520.0, 310.0);
        assert_eq!(area.right(), 570.0);
        assert_eq!(area.bottom(), 350.0);
        assert_eq!(area.center(), Point::new(310.0, 195.0));
    }

    #[test]
    fn test_contains_y_inclusive() {
        let area = PlotArea::new(0.0, 10.0, 100.0, 100.0);
        assert!(area.contains_y(10.0));
        assert!(area.contains_y(110.0));
        assert!(!area.contains_y(110.5));
        assert!(!area.contains_y(9.9));
    }
}
