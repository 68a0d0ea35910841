//! Facet-derived types for the SVG subset ringcal emits.
//!
//! Every sheet is a tree of groups holding paths and text elements. Curved
//! month names need `<textPath>`, so `Text` can carry child nodes as well as
//! plain character data.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::{Path, Svg, SvgNode};
//!
//! let svg = Svg {
//!     width: Some("212.5mm".to_string()),
//!     height: Some("275mm".to_string()),
//!     view_box: Some("0 0 212.5 275".to_string()),
//!     children: vec![SvgNode::Path(Path {
//!         d: Some("M 0,0 L 10,10".to_string()),
//!         ..Default::default()
//!     })],
//!     ..Default::default()
//! };
//! let xml = facet_svg::facet_xml::to_string(&svg).unwrap();
//! assert!(xml.contains("<path"));
//! ```

use facet::Facet;
use facet_xml as xml;

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node a sheet can contain
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "text")]
    Text(Text),
}

/// Child nodes allowed inside `<text>`
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum TextNode {
    #[facet(rename = "textPath")]
    TextPath(TextPath),
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Common presentation attributes shared by shape elements
pub trait PresentationAttrs {
    fn fill(&self) -> Option<&str>;
    fn stroke(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<&str>;
}

macro_rules! impl_presentation_attrs {
    ($($ty:ty),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn fill(&self) -> Option<&str> { self.fill.as_deref() }
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn stroke_width(&self) -> Option<&str> { self.stroke_width.as_deref() }
            }
        )*
    };
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<f64>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "dominant-baseline")]
    pub dominant_baseline: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<TextNode>,
    #[facet(xml::text)]
    pub content: String,
}

/// SVG text-on-path element (`<textPath>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct TextPath {
    #[facet(xml::attribute)]
    pub href: Option<String>,
    #[facet(xml::attribute, rename = "startOffset")]
    pub start_offset: Option<String>,
    #[facet(xml::attribute)]
    pub method: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "dominant-baseline")]
    pub dominant_baseline: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

impl_presentation_attrs!(Path);

// Re-export facet_xml for convenience
pub use facet_xml;
