//! Drawable primitives for calendar sheets
//!
//! Each primitive knows how to render itself into SVG nodes. Rendering
//! always yields a sequence, even for primitives that emit one node.

use enum_dispatch::enum_dispatch;
use facet_svg::{Path, SvgNode, Text, TextNode, TextPath};

use super::defaults;
use super::geometry::{Arc, ArcDrawMode, DimensionalArc};
use super::svg::fmt_num;
use crate::types::{Angle, Length, Point};

/// Per-document rendering state.
///
/// Text paths need ids that are unique within one SVG document; the counter
/// lives here so every document starts fresh.
#[derive(Debug, Clone)]
pub struct DrawContext {
    pub stroke_width: Length,
    next_path_id: usize,
}

impl DrawContext {
    pub fn new(stroke_width: Length) -> Self {
        Self {
            stroke_width,
            next_path_id: 0,
        }
    }

    fn text_path_id(&mut self) -> String {
        let id = format!("textpath-{}", self.next_path_id);
        self.next_path_id += 1;
        id
    }
}

/// Common behavior for everything placed on a sheet
#[enum_dispatch]
pub trait Drawable {
    /// Render to SVG nodes
    fn render_svg(&self, ctx: &mut DrawContext) -> Vec<SvgNode>;
}

/// A filled annular sector (month background or date box)
#[derive(Debug, Clone)]
pub struct RingSector {
    pub sector: DimensionalArc,
    pub fill: String,
}

impl Drawable for RingSector {
    fn render_svg(&self, ctx: &mut DrawContext) -> Vec<SvgNode> {
        vec![SvgNode::Path(Path {
            d: Some(self.sector.path()),
            fill: Some(self.fill.clone()),
            stroke: Some(defaults::STROKE.to_string()),
            stroke_width: Some(fmt_num(ctx.stroke_width.raw())),
            ..Default::default()
        })]
    }
}

/// Text that follows an arc
#[derive(Debug, Clone)]
pub struct CurvedText {
    pub arc: Arc,
    pub text: String,
    pub font_size: Length,
}

impl Drawable for CurvedText {
    fn render_svg(&self, ctx: &mut DrawContext) -> Vec<SvgNode> {
        let id = ctx.text_path_id();

        // Invisible guide path for the text to follow
        let guide = Path {
            id: Some(id.clone()),
            d: Some(self.arc.path(ArcDrawMode::Move)),
            fill: Some("none".to_string()),
            stroke: Some("none".to_string()),
            ..Default::default()
        };

        let text = Text {
            font_size: Some(self.font_size.raw()),
            font_family: Some(defaults::FONT_FAMILY.to_string()),
            children: vec![TextNode::TextPath(TextPath {
                href: Some(format!("#{id}")),
                start_offset: Some("50%".to_string()),
                method: Some("align".to_string()),
                text_anchor: Some("middle".to_string()),
                dominant_baseline: Some("middle".to_string()),
                content: self.text.clone(),
            })],
            ..Default::default()
        };

        vec![SvgNode::Path(guide), SvgNode::Text(text)]
    }
}

/// Text centred on a point and rotated about it
#[derive(Debug, Clone)]
pub struct CenteredText {
    pub anchor: Point,
    pub text: String,
    pub font_size: Length,
    pub rotation: Angle,
}

impl Drawable for CenteredText {
    fn render_svg(&self, _ctx: &mut DrawContext) -> Vec<SvgNode> {
        let x = self.anchor.x;
        let y = self.anchor.y;
        let nudged_y = y + self.font_size.raw() * defaults::DATE_BASELINE_NUDGE;

        vec![SvgNode::Text(Text {
            x: Some(x),
            y: Some(nudged_y),
            font_size: Some(self.font_size.raw()),
            text_anchor: Some("middle".to_string()),
            dominant_baseline: Some("middle".to_string()),
            transform: Some(format!(
                "rotate({}, {}, {})",
                fmt_num(self.rotation.raw()),
                fmt_num(x),
                fmt_num(y)
            )),
            content: self.text.clone(),
            ..Default::default()
        })]
    }
}

/// Any primitive a month strip is built from
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone)]
pub enum Primitive {
    RingSector(RingSector),
    CurvedText(CurvedText),
    CenteredText(CenteredText),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::{build_arc, build_dimensional_arc};
    use facet_svg::PresentationAttrs;
    use glam::DVec2;

    #[test]
    fn ring_sector_renders_one_filled_path() {
        let sector =
            build_dimensional_arc(DVec2::ZERO, Length(5.0), Length(10.0), Angle(0.0), Angle(90.0))
                .unwrap();
        let prim: Primitive = RingSector {
            sector,
            fill: "#aebbff".to_string(),
        }
        .into();
        let mut ctx = DrawContext::new(Length(0.07));
        let nodes = prim.render_svg(&mut ctx);
        assert_eq!(nodes.len(), 1);
        let SvgNode::Path(path) = &nodes[0] else {
            panic!("expected a path");
        };
        assert_eq!(path.fill(), Some("#aebbff"));
        assert_eq!(path.stroke(), Some("black"));
        assert_eq!(path.stroke_width(), Some("0.07"));
    }

    #[test]
    fn curved_text_ids_are_unique_per_context() {
        let arc = build_arc(DVec2::ZERO, Length(10.0), Angle(-100.0), Angle(-80.0)).unwrap();
        let prim: Primitive = CurvedText {
            arc,
            text: "January".to_string(),
            font_size: Length(3.0),
        }
        .into();

        let mut ctx = DrawContext::new(Length(0.1));
        let first = prim.render_svg(&mut ctx);
        let second = prim.render_svg(&mut ctx);

        let id_of = |nodes: &[SvgNode]| match &nodes[0] {
            SvgNode::Path(p) => p.id.clone(),
            _ => None,
        };
        assert_eq!(id_of(&first).as_deref(), Some("textpath-0"));
        assert_eq!(id_of(&second).as_deref(), Some("textpath-1"));

        let SvgNode::Text(text) = &first[1] else {
            panic!("expected text");
        };
        let TextNode::TextPath(tp) = &text.children[0];
        assert_eq!(tp.href.as_deref(), Some("#textpath-0"));
        assert_eq!(tp.content, "January");

        // A fresh document restarts numbering
        let mut fresh = DrawContext::new(Length(0.1));
        assert_eq!(id_of(&prim.render_svg(&mut fresh)).as_deref(), Some("textpath-0"));
    }

    #[test]
    fn centered_text_rotates_about_its_anchor() {
        let prim: Primitive = CenteredText {
            anchor: glam::dvec2(10.0, 20.0),
            text: "17".to_string(),
            font_size: Length(2.0),
            rotation: Angle(-30.0),
        }
        .into();
        let nodes = prim.render_svg(&mut DrawContext::new(Length(0.1)));
        let SvgNode::Text(text) = &nodes[0] else {
            panic!("expected text");
        };
        assert_eq!(text.content, "17");
        assert_eq!(text.transform.as_deref(), Some("rotate(-30, 10, 20)"));
        assert!((text.y.unwrap() - 20.2).abs() < 1e-9);
    }
}
