//! SVG generation for sheets

use facet_svg::facet_xml::SerializeOptions;
use facet_svg::{Group, Svg, SvgNode, facet_xml};

use super::shapes::{DrawContext, Drawable};
use crate::compose::{PlacedGroup, Sheet};
use crate::errors::RenderError;
use crate::log::debug;
use crate::types::Length;

/// Format a coordinate with at most 4 decimals, trailing zeros trimmed.
///
/// `-0` prints as `0` so output is stable across platforms.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 1e4).round() / 1e4;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.4}");
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

fn render_group(group: &PlacedGroup, ctx: &mut DrawContext) -> SvgNode {
    let children = group
        .parts
        .iter()
        .flat_map(|part| part.render_svg(ctx))
        .collect();
    SvgNode::G(Group {
        id: None,
        transform: group.transform.clone(),
        children,
    })
}

/// Build the SVG DOM for a sheet: a page-sized canvas in millimetres with
/// one `<g>` per placed strip. The namespace comes from the element types.
pub fn render_sheet(sheet: &Sheet, stroke_width: Length) -> Svg {
    let mut ctx = DrawContext::new(stroke_width);
    let width = fmt_num(sheet.width.raw());
    let height = fmt_num(sheet.height.raw());

    Svg {
        xmlns: None,
        width: Some(format!("{width}mm")),
        height: Some(format!("{height}mm")),
        view_box: Some(format!("0 0 {width} {height}")),
        children: sheet
            .groups
            .iter()
            .map(|group| render_group(group, &mut ctx))
            .collect(),
    }
}

/// Serialize a sheet to a standalone SVG document.
pub fn sheet_to_string(sheet: &Sheet, stroke_width: Length) -> Result<String, RenderError> {
    fn format_float(value: f64, writer: &mut dyn std::io::Write) -> Result<(), std::io::Error> {
        write!(writer, "{}", fmt_num(value))
    }

    let svg = render_sheet(sheet, stroke_width);
    let options = SerializeOptions {
        float_formatter: Some(format_float),
        ..Default::default()
    };
    let xml = facet_xml::to_string_with_options(&svg, &options).map_err(|e| RenderError::Serialize {
        artifact: sheet.name.clone(),
        message: e.to_string(),
    })?;
    debug!(artifact = %sheet.name, bytes = xml.len(), "serialized sheet");
    Ok(xml)
}
