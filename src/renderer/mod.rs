//! SVG renderer primitives
//!
//! Charts are assembled from the element constructors in [`svg`] and wrapped
//! in an [`SvgDocument`]. All user-supplied text and attribute values are
//! escaped on the way out.

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{PathData, PathSegment};
pub use svg::{escape_xml, Attrs, SvgDocument};
