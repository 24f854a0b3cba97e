//! SVG markup assembly: attribute lists, primitive shape constructors and
//! the document builder that wraps them in a root `<svg>` element

use std::fmt::Display;

use super::SvgConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Ordered list of SVG attributes
///
/// Attributes render in insertion order so the same input always produces
/// the same markup. Setting an attribute that is already present replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(&'static str, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value for the same name
    pub fn set(mut self, name: &'static str, value: impl Display) -> Self {
        self.insert(name, value.to_string());
        self
    }

    /// Set an attribute only when a value is present
    pub fn set_opt(self, name: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.set(name, v),
            None => self,
        }
    }

    /// Merge another attribute list over this one
    pub fn merge(mut self, other: Attrs) -> Self {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
        self
    }

    fn insert(&mut self, name: &'static str, value: String) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Render as ` name="value"` pairs with escaped values
    fn to_markup(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!(r#" {}="{}""#, name, escape_xml(value)))
            .collect()
    }
}

/// Build an arbitrary element; `content` is inserted verbatim
pub fn element(tag: &str, attrs: &Attrs, content: &str) -> String {
    if content.is_empty() {
        format!("<{}{}/>", tag, attrs.to_markup())
    } else {
        format!("<{}{}>{}</{}>", tag, attrs.to_markup(), content, tag)
    }
}

/// Create a line element
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, attrs: Attrs) -> String {
    let attrs = Attrs::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .merge(attrs);
    element("line", &attrs, "")
}

/// Create a rectangle element
pub fn rect(x: f64, y: f64, width: f64, height: f64, attrs: Attrs) -> String {
    let attrs = Attrs::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .merge(attrs);
    element("rect", &attrs, "")
}

/// Create a circle element
pub fn circle(cx: f64, cy: f64, r: f64, attrs: Attrs) -> String {
    let attrs = Attrs::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r)
        .merge(attrs);
    element("circle", &attrs, "")
}

/// Create a path element from a `d` attribute string
pub fn path(d: &str, attrs: Attrs) -> String {
    let attrs = Attrs::new().set("d", d).merge(attrs);
    element("path", &attrs, "")
}

/// Create a text element; the content is escaped
pub fn text(x: f64, y: f64, content: &str, attrs: Attrs) -> String {
    let attrs = Attrs::new().set("x", x).set("y", y).merge(attrs);
    format!("<text{}>{}</text>", attrs.to_markup(), escape_xml(content))
}

/// Create a group element around already-built children
pub fn group(attrs: Attrs, children: &[String]) -> String {
    format!("<g{}>{}</g>", attrs.to_markup(), children.concat())
}

/// Build a complete SVG document
pub struct SvgDocument {
    config: SvgConfig,
    width: f64,
    height: f64,
    class_name: Option<String>,
    elements: Vec<String>,
}

impl SvgDocument {
    /// Create an empty document sized `width` x `height`
    pub fn new(width: f64, height: f64, config: SvgConfig) -> Self {
        Self {
            config,
            width,
            height,
            class_name: None,
            elements: vec![],
        }
    }

    /// Set the class attribute of the root element
    pub fn with_class(mut self, class_name: Option<&str>) -> Self {
        self.class_name = class_name.map(str::to_string);
        self
    }

    /// Append a top-level element; empty fragments are skipped
    pub fn push(&mut self, element: String) {
        if !element.is_empty() {
            self.elements.push(element);
        }
    }

    /// Append several top-level elements
    pub fn extend(&mut self, elements: impl IntoIterator<Item = String>) {
        for element in elements {
            self.push(element);
        }
    }

    /// The opening `<svg>` tag
    pub fn open_tag(&self) -> String {
        let attrs = Attrs::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set_opt("class", self.class_name.as_deref())
            .set("xmlns", SVG_NAMESPACE);
        format!("<svg{}>", attrs.to_markup())
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push('\n');
        }

        svg.push_str(&self.open_tag());

        for elem in &self.elements {
            if self.config.pretty_print {
                svg.push_str("\n  ");
            }
            svg.push_str(elem);
        }

        if self.config.pretty_print {
            svg.push('\n');
        }
        svg.push_str("</svg>");

        svg
    }
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
