//! Configuration for SVG document output

/// How a rendered chart document is serialized
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgConfig {
    /// Whether to prepend an XML declaration (for standalone `.svg` files)
    pub standalone: bool,

    /// Whether to put each top-level element on its own indented line
    pub pretty_print: bool,
}

impl SvgConfig {
    /// Bare inline markup: no declaration, single line
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration suited to writing a standalone `.svg` file
    pub fn file_export() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
        }
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
