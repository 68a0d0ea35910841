//! Print-space layout: ring dimensions, pagination, and month instances.
//!
//! Everything here is a pure function of the scale factor, the days in the
//! year, and (for the Hijri ring) the calendar alignment.

use std::ops::Range;

use crate::calendar::alignment::{CalendarAlignment, rotate_months};
use crate::calendar::data::{ISLAMIC_YEAR_CANONICAL, Month, SOLAR_YEAR};
use crate::errors::LayoutError;
use crate::log::debug;
use crate::render::defaults;
use crate::types::{Angle, Length};

/// Solar months drawn upside-down, by 0-based position (April..September).
pub const SOLAR_UPSIDE_DOWN: Range<usize> = 3..9;
/// Hijri months are upside-down when `AFTER < ordinal <= THROUGH`, by their
/// 1-based presentation ordinal.
pub const ISLAMIC_UPSIDE_DOWN_AFTER: u32 = 3;
pub const ISLAMIC_UPSIDE_DOWN_THROUGH: u32 = 9;

/// Degrees one twelfth of the ring turns.
const MONTH_STEP_DEGREES: f64 = 360.0 / 12.0;

/// One renderable month strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthInstance {
    pub name: &'static str,
    pub num_days: u32,
    pub color: &'static str,
    pub inner_radius: Length,
    pub outer_radius: Length,
    pub date_box_height: Length,
    /// Date boxes hug the outer edge instead of the inner one.
    pub date_on_top: bool,
    /// Reverse the name's reading direction for the lower half of the circle.
    pub name_upside_down: bool,
    /// Rotation applied to every day numeral in the strip.
    pub date_angle_offset: Angle,
}

/// Rows and columns of strip pairs per sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub rows: usize,
    pub columns: usize,
}

impl Pagination {
    pub fn per_page(&self) -> usize {
        self.rows * self.columns
    }
}

/// Sheet grid for a scale factor. A step function:
/// `<= 0.5` is 5×2, `< 0.75` is 4×1, anything larger is 2×1.
pub fn get_pagination(scale: f64) -> Pagination {
    let (rows, columns) = if scale <= 0.5 {
        (5, 2)
    } else if scale < 0.75 {
        (4, 1)
    } else {
        (2, 1)
    };
    Pagination { rows, columns }
}

/// Numeral rotation for a 1-based presentation ordinal: -30° per step.
pub fn date_rotation(ordinal: u32) -> Angle {
    Angle(-f64::from(ordinal.saturating_sub(1)) * MONTH_STEP_DEGREES)
}

/// Angle of a month's temporal centre on the full circle.
pub fn calculate_circle_rotation(days_elapsed: f64, num_days: u32, days_in_year: u32) -> Angle {
    Angle(360.0 * (days_elapsed + f64::from(num_days) / 2.0) / f64::from(days_in_year))
}

/// All print-space dimensions for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub scale: f64,
    pub days_in_year: u32,
    /// Print width one month spans (8 in, scaled)
    pub ring_width: Length,
    pub outermost_radius: Length,
    pub inner_radius: Length,
    pub month_thickness: Length,
    pub date_box_height: Length,
    /// Horizontal centre of the first column of strips
    pub width_center: Length,
    pub vertical_offset: Length,
    /// Gap between a solar strip and its Hijri partner
    pub month_offset: Length,
    pub stroke_width: Length,
    pub pagination: Pagination,
}

impl Layout {
    pub fn new(scale: f64, days_in_year: u32) -> Result<Self, LayoutError> {
        if days_in_year == 0 {
            return Err(LayoutError::InvalidDaysInYear {
                value: days_in_year,
            });
        }
        // A scale is usable iff the ring it yields has a positive, finite width
        let ring_width = Length::try_positive(defaults::RING_PRINT_WIDTH.raw() * scale)
            .map_err(|_| LayoutError::InvalidScale { value: scale })?;
        let outermost_radius = ring_width / (2.0 * std::f64::consts::PI / 12.0);
        let inner_radius = outermost_radius * defaults::INNER_RADIUS_RATIO;
        let month_thickness = outermost_radius - inner_radius;
        let date_box_height = month_thickness * defaults::DATE_BOX_RATIO;

        let layout = Self {
            scale,
            days_in_year,
            ring_width,
            outermost_radius,
            inner_radius,
            month_thickness,
            date_box_height,
            width_center: defaults::STRIP_PAGE_WIDTH * scale / 2.0 + defaults::CENTER_MARGIN,
            vertical_offset: defaults::VERTICAL_OFFSET * scale,
            month_offset: defaults::MONTH_OFFSET * scale,
            stroke_width: defaults::STROKE_WIDTH * scale,
            pagination: get_pagination(scale),
        };
        debug!(?layout, "computed layout");
        Ok(layout)
    }

    /// Inner and outer radius of the Hijri ring, one thickness inside the
    /// solar ring.
    pub fn islamic_radii(&self) -> (Length, Length) {
        (
            self.inner_radius - self.month_thickness,
            self.outermost_radius - self.month_thickness,
        )
    }
}

/// Solar strips in calendar order.
pub fn build_solar_month_instances(layout: &Layout) -> Vec<MonthInstance> {
    solar_instances(layout, SOLAR_YEAR.months)
}

fn solar_instances(layout: &Layout, months: &[Month]) -> Vec<MonthInstance> {
    months
        .iter()
        .enumerate()
        .flat_map(|(index, month)| {
            month.num_days.iter().map(move |&num_days| MonthInstance {
                name: month.name,
                num_days,
                color: month.color,
                inner_radius: layout.inner_radius,
                outer_radius: layout.outermost_radius,
                date_box_height: layout.date_box_height,
                date_on_top: false,
                name_upside_down: SOLAR_UPSIDE_DOWN.contains(&index),
                date_angle_offset: date_rotation(month.number),
            })
        })
        .collect()
}

/// Hijri strips, starting at the current month.
pub fn build_islamic_month_instances(
    layout: &Layout,
    alignment: &CalendarAlignment,
) -> Vec<MonthInstance> {
    let rotated = rotate_months(ISLAMIC_YEAR_CANONICAL.months, alignment.current_month_index);
    islamic_instances(layout, &rotated, alignment.rotation_offset)
}

fn islamic_instances(
    layout: &Layout,
    months: &[Month],
    rotation_offset: i64,
) -> Vec<MonthInstance> {
    let (inner_radius, outer_radius) = layout.islamic_radii();
    months
        .iter()
        .flat_map(|month| {
            let upside_down = month.number > ISLAMIC_UPSIDE_DOWN_AFTER
                && month.number <= ISLAMIC_UPSIDE_DOWN_THROUGH;
            // Degrees plus a day count: one day of offset turns numerals by 1°.
            let offset = date_rotation(month.number) + Angle(rotation_offset as f64);
            month.num_days.iter().map(move |&num_days| MonthInstance {
                name: month.name,
                num_days,
                color: month.color,
                inner_radius,
                outer_radius,
                date_box_height: layout.date_box_height,
                date_on_top: true,
                name_upside_down: upside_down,
                date_angle_offset: offset,
            })
        })
        .collect()
}
