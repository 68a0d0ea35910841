//! Default sizes and styling (lengths in millimetres, 25 mm per inch)

use crate::types::Length;

/// Print-width budget one twelfth of the ring circumference is cut from.
pub const RING_PRINT_WIDTH: Length = Length::inches(8.0);
/// Page width the strips are centred on.
pub const STRIP_PAGE_WIDTH: Length = Length::inches(11.0);
pub const INNER_RADIUS_RATIO: f64 = 0.92;
pub const DATE_BOX_RATIO: f64 = 0.2;
pub const CENTER_MARGIN: Length = Length::mm(10.0);
pub const VERTICAL_OFFSET: Length = Length::mm(30.0);
pub const MONTH_OFFSET: Length = Length::mm(4.0);
pub const STROKE_WIDTH: Length = Length::mm(0.1);

/// Gap between the bottom of one strip pair and the next, in ring thicknesses.
pub const ROW_STEP_RATIO: f64 = 2.3;
pub const COLUMN_STEP_RATIO: f64 = 1.05;

pub const COVER_TRANSLATE: (f64, f64) = (75.0, 50.0);
pub const COVER_SCALE: f64 = 0.3;

pub const STROKE: &str = "black";
pub const DATE_FILL: &str = "#fbebb3";
pub const FONT_FAMILY: &str = "Arimo, Arial, Helvetica, sans-serif";
/// Date numeral height as a fraction of the date box.
pub const DATE_FONT_RATIO: f64 = 0.6;
/// Baseline nudge that visually centres numerals, as a fraction of font size.
pub const DATE_BASELINE_NUDGE: f64 = 0.1;
