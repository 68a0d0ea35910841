//! Month strip geometry.
//!
//! A strip is drawn centred on 12 o'clock (-90°): one background sector,
//! the curved month name, then a date box and numeral per day.

use crate::errors::GeometryError;
use crate::layout::MonthInstance;
use crate::types::{Angle, Length, Point};

use super::defaults;
use super::geometry::{build_arc, build_dimensional_arc};
use super::shapes::{CenteredText, CurvedText, Primitive, RingSector};

/// Build every primitive for one month strip around `origin`.
///
/// For an N-day month this yields exactly `2 + 2N` primitives.
pub fn month_geometry(
    month: &MonthInstance,
    days_in_year: u32,
    origin: Point,
) -> Result<Vec<Primitive>, GeometryError> {
    let n = month.num_days;
    let width = 360.0 * f64::from(n) / f64::from(days_in_year);
    let start = Angle::TOP - Angle(width / 2.0);
    let stop = Angle::TOP + Angle(width / 2.0);

    let mut parts = Vec::with_capacity(2 + 2 * n as usize);

    let background =
        build_dimensional_arc(origin, month.inner_radius, month.outer_radius, start, stop)?;
    parts.push(
        RingSector {
            sector: background,
            fill: month.color.to_string(),
        }
        .into(),
    );

    let (date_inner, date_outer, name_radius) = if month.date_on_top {
        let date_inner = month.outer_radius - month.date_box_height;
        (date_inner, month.outer_radius, date_inner.midpoint(month.inner_radius))
    } else {
        let date_outer = month.inner_radius + month.date_box_height;
        (month.inner_radius, date_outer, date_outer.midpoint(month.outer_radius))
    };

    let name_arc = if month.name_upside_down {
        build_arc(origin, name_radius, stop, start)?
    } else {
        build_arc(origin, name_radius, start, stop)?
    };
    let name_size = (month.outer_radius - month.inner_radius - month.date_box_height) / 2.0;
    parts.push(
        CurvedText {
            arc: name_arc,
            text: month.name.to_string(),
            font_size: name_size,
        }
        .into(),
    );

    let day_width = width / f64::from(n);
    let date_size: Length = (date_outer - date_inner) * defaults::DATE_FONT_RATIO;

    for day in 0..n {
        let day_start = start + Angle(day_width * f64::from(day));
        let day_stop = day_start + Angle(day_width);

        let sector = build_dimensional_arc(origin, date_inner, date_outer, day_start, day_stop)?;
        parts.push(
            RingSector {
                sector,
                fill: defaults::DATE_FILL.to_string(),
            }
            .into(),
        );
        parts.push(
            CenteredText {
                anchor: sector.centroid(origin),
                text: (day + 1).to_string(),
                font_size: date_size,
                rotation: month.date_angle_offset,
            }
            .into(),
        );
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::geometry::point_on_circle;
    use glam::{DVec2, dvec2};

    fn month(num_days: u32, date_on_top: bool, name_upside_down: bool) -> MonthInstance {
        MonthInstance {
            name: "Test",
            num_days,
            color: "#aebbff",
            inner_radius: Length(92.0),
            outer_radius: Length(100.0),
            date_box_height: Length(1.6),
            date_on_top,
            name_upside_down,
            date_angle_offset: Angle(-30.0),
        }
    }

    #[test]
    fn element_count_is_two_plus_two_per_day() {
        for n in [1, 29, 30, 31] {
            let parts = month_geometry(&month(n, false, false), 366, DVec2::ZERO).unwrap();
            assert_eq!(parts.len(), 2 + 2 * n as usize);
        }
        assert_eq!(month_geometry(&month(31, true, false), 366, DVec2::ZERO).unwrap().len(), 64);
        assert_eq!(month_geometry(&month(29, true, true), 366, DVec2::ZERO).unwrap().len(), 60);
    }

    #[test]
    fn strip_is_centred_on_twelve_oclock() {
        let parts = month_geometry(&month(30, false, false), 360, DVec2::ZERO).unwrap();
        let Primitive::RingSector(bg) = &parts[0] else {
            panic!("background first");
        };
        assert_eq!(bg.sector.outer.start_angle, Angle(-105.0));
        assert_eq!(bg.sector.outer.stop_angle, Angle(-75.0));
        assert_eq!(bg.fill, "#aebbff");
    }

    #[test]
    fn date_band_follows_date_on_top() {
        let below = month_geometry(&month(30, false, false), 366, DVec2::ZERO).unwrap();
        let Primitive::RingSector(first_box) = &below[2] else {
            panic!("date box");
        };
        assert_eq!(first_box.sector.inner.radius, Length(92.0));
        assert!((first_box.sector.outer.radius.raw() - 93.6).abs() < 1e-9);

        let above = month_geometry(&month(30, true, false), 366, DVec2::ZERO).unwrap();
        let Primitive::RingSector(first_box) = &above[2] else {
            panic!("date box");
        };
        assert_eq!(first_box.sector.outer.radius, Length(100.0));
        assert!((first_box.sector.inner.radius.raw() - 98.4).abs() < 1e-9);

        let Primitive::CurvedText(name) = &above[1] else {
            panic!("name second");
        };
        assert!((name.arc.radius.raw() - 95.2).abs() < 1e-9);
        assert!((name.font_size.raw() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn upside_down_name_runs_backwards() {
        let parts = month_geometry(&month(30, false, true), 366, DVec2::ZERO).unwrap();
        let Primitive::CurvedText(name) = &parts[1] else {
            panic!("name second");
        };
        assert!(!name.arc.sweep);
        assert!(name.arc.start_angle > name.arc.stop_angle);

        let parts = month_geometry(&month(30, false, false), 366, DVec2::ZERO).unwrap();
        let Primitive::CurvedText(name) = &parts[1] else {
            panic!("name second");
        };
        assert!(name.arc.sweep);
    }

    #[test]
    fn day_boxes_tile_the_month() {
        let parts = month_geometry(&month(30, false, false), 360, DVec2::ZERO).unwrap();
        let boxes: Vec<_> = parts
            .iter()
            .filter_map(|p| match p {
                Primitive::RingSector(s) if s.fill == defaults::DATE_FILL => Some(s.sector),
                _ => None,
            })
            .collect();
        assert_eq!(boxes.len(), 30);
        assert!((boxes[0].outer.start_angle.raw() + 105.0).abs() < 1e-9);
        assert!((boxes[29].outer.stop_angle.raw() + 75.0).abs() < 1e-9);
        for pair in boxes.windows(2) {
            let gap = pair[0].outer.stop_angle.raw() - pair[1].outer.start_angle.raw();
            assert!(gap.abs() < 1e-9);
        }
    }

    #[test]
    fn numerals_sit_mid_box_and_carry_offset() {
        let origin = dvec2(50.0, 120.0);
        let parts = month_geometry(&month(30, false, false), 360, origin).unwrap();
        let Primitive::CenteredText(first) = &parts[3] else {
            panic!("numeral after box");
        };
        assert_eq!(first.text, "1");
        assert_eq!(first.rotation, Angle(-30.0));
        assert!((first.font_size.raw() - 0.96).abs() < 1e-9);
        let expected = point_on_circle(origin, Length(92.8), Angle(-104.5));
        assert!((first.anchor - expected).length() < 1e-9);

        let Primitive::CenteredText(last) = parts.last().unwrap() else {
            panic!("numeral last");
        };
        assert_eq!(last.text, "30");
    }

    #[test]
    fn zero_day_month_is_rejected() {
        assert!(month_geometry(&month(0, false, false), 366, DVec2::ZERO).is_err());
    }
}
