//! Page composition: strips placed onto sheets, plus the circular cover.

use chrono::NaiveDate;
use glam::dvec2;

use crate::calendar::alignment::CalendarAlignment;
use crate::errors::{GeometryError, RenderError};
use crate::layout::{Layout, MonthInstance, calculate_circle_rotation};
use crate::log::{debug, info};
use crate::render::defaults;
use crate::render::month::month_geometry;
use crate::render::shapes::Primitive;
use crate::render::svg::{fmt_num, sheet_to_string};
use crate::types::{Length, Point};

/// Primitives drawn under one transform.
#[derive(Debug, Clone)]
pub struct PlacedGroup {
    pub transform: Option<String>,
    pub parts: Vec<Primitive>,
}

/// One printable sheet.
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Output file name
    pub name: String,
    pub width: Length,
    pub height: Length,
    pub groups: Vec<PlacedGroup>,
}

impl Sheet {
    fn new(name: String, (width, height): (Length, Length)) -> Self {
        Self {
            name,
            width,
            height,
            groups: Vec::new(),
        }
    }
}

/// Which artifact a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// 0-based strip page
    Page(usize),
    Cover,
}

/// `calendar_<date>_<scale>_page_<n>.svg` or `calendar_<date>_<scale>_cover.svg`.
pub fn artifact_name(date: NaiveDate, scale: f64, artifact: Artifact) -> String {
    match artifact {
        Artifact::Page(n) => format!("calendar_{date}_{scale}_page_{n}.svg"),
        Artifact::Cover => format!("calendar_{date}_{scale}_cover.svg"),
    }
}

/// Centre of the first strip on a sheet.
fn origin_first(layout: &Layout) -> Point {
    dvec2(
        layout.width_center.raw(),
        (layout.outermost_radius + layout.vertical_offset).raw(),
    )
}

fn strip(
    month: &MonthInstance,
    layout: &Layout,
    origin: Point,
) -> Result<PlacedGroup, GeometryError> {
    Ok(PlacedGroup {
        transform: None,
        parts: month_geometry(month, layout.days_in_year, origin)?,
    })
}

/// Lay solar/Hijri strip pairs onto sheets, `rows` pairs per column and
/// `columns` columns per sheet.
///
/// Paging continues while the last index visited is below `len - 1`, so a
/// single-month ring yields no pages.
pub fn compose_pages(
    layout: &Layout,
    solar: &[MonthInstance],
    islamic: &[MonthInstance],
    page_size: (Length, Length),
    date: NaiveDate,
) -> Result<Vec<Sheet>, GeometryError> {
    let rows = layout.pagination.rows;
    let columns = layout.pagination.columns;
    let first = origin_first(layout);
    let column_step = (layout.ring_width * defaults::COLUMN_STEP_RATIO).raw();
    let row_step =
        ((layout.month_thickness + layout.month_offset) * defaults::ROW_STEP_RATIO).raw();

    let mut pages = Vec::new();
    let mut month_idx = 0;
    let mut page_num = 0;

    while month_idx + 1 < solar.len() {
        let name = artifact_name(date, layout.scale, Artifact::Page(page_num));
        let mut sheet = Sheet::new(name, page_size);

        for col in 0..columns {
            let mut origin = first + dvec2(column_step * col as f64, 0.0);
            for row in 0..rows {
                month_idx = row + rows * col + rows * columns * page_num;

                if let Some(month) = solar.get(month_idx) {
                    sheet.groups.push(strip(month, layout, origin)?);
                    origin.y += layout.month_offset.raw();
                }
                if let Some(month) = islamic.get(month_idx) {
                    sheet.groups.push(strip(month, layout, origin)?);
                    origin.y += row_step;
                }
            }
        }

        debug!(page = page_num, strips = sheet.groups.len(), "composed page");
        pages.push(sheet);
        page_num += 1;
    }

    info!(pages = pages.len(), "composed strip pages");
    Ok(pages)
}

fn cover_transform(rotation: f64, origin: Point, first: Point) -> String {
    let (tx, ty) = defaults::COVER_TRANSLATE;
    format!(
        "translate({}, {}) scale({}) rotate({}, {}, {}) translate(0, {})",
        fmt_num(tx),
        fmt_num(ty),
        fmt_num(defaults::COVER_SCALE),
        fmt_num(rotation),
        fmt_num(origin.x),
        fmt_num(origin.y),
        fmt_num(first.y - origin.y),
    )
}

/// The assembled circle: every strip drawn at the same origin, shrunk and
/// rotated to where its month's centre falls in the year.
///
/// Each ring keeps a running day total; a month is placed at
/// `running + num_days / 2` before its own days are added.
pub fn compose_cover(
    layout: &Layout,
    solar: &[MonthInstance],
    islamic: &[MonthInstance],
    alignment: &CalendarAlignment,
    page_size: (Length, Length),
    date: NaiveDate,
) -> Result<Sheet, GeometryError> {
    let mut sheet = Sheet::new(artifact_name(date, layout.scale, Artifact::Cover), page_size);
    let first = origin_first(layout);
    let origin = first;

    let half = |months: &[MonthInstance]| {
        months.first().map_or(0.0, |m| f64::from(m.num_days) / 2.0)
    };
    let mut solar_elapsed = -half(solar);
    let mut islamic_elapsed = alignment.days_elapsed - half(islamic);

    let mut place = |month: &MonthInstance, elapsed: f64| -> Result<(), GeometryError> {
        let rotation = calculate_circle_rotation(elapsed, month.num_days, layout.days_in_year);
        sheet.groups.push(PlacedGroup {
            transform: Some(cover_transform(rotation.raw(), origin, first)),
            parts: month_geometry(month, layout.days_in_year, origin)?,
        });
        Ok(())
    };

    // Pairs interleave; a ring with more strips keeps going on its own
    for i in 0..solar.len().max(islamic.len()) {
        if let Some(month) = solar.get(i) {
            place(month, solar_elapsed)?;
            solar_elapsed += f64::from(month.num_days);
        }
        if let Some(month) = islamic.get(i) {
            place(month, islamic_elapsed)?;
            islamic_elapsed += f64::from(month.num_days);
        }
    }

    info!(strips = sheet.groups.len(), "composed cover");
    Ok(sheet)
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    pub alignment: CalendarAlignment,
    pub layout: Layout,
    pub pages: Vec<Sheet>,
    pub cover: Sheet,
}

impl CalendarDocument {
    /// Cover first, then pages in order.
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        std::iter::once(&self.cover).chain(self.pages.iter())
    }

    /// Serialize every sheet, returning `(file name, svg)` pairs.
    pub fn render(&self) -> Result<Vec<(String, String)>, RenderError> {
        self.sheets()
            .map(|sheet| {
                let svg = sheet_to_string(sheet, self.layout.stroke_width)?;
                Ok((sheet.name.clone(), svg))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::alignment::align_heuristic;
    use crate::calendar::date::TargetDate;
    use crate::layout::{build_islamic_month_instances, build_solar_month_instances};

    const PORTRAIT: (Length, Length) = (Length::inches(8.5), Length::inches(11.0));

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 5).unwrap()
    }

    fn setup(scale: f64) -> (Layout, Vec<MonthInstance>, Vec<MonthInstance>, CalendarAlignment) {
        let layout = Layout::new(scale, 366).unwrap();
        let alignment = align_heuristic(TargetDate::Gregorian(date())).unwrap();
        let solar = build_solar_month_instances(&layout);
        let islamic = build_islamic_month_instances(&layout, &alignment);
        (layout, solar, islamic, alignment)
    }

    #[test]
    fn artifact_names() {
        assert_eq!(
            artifact_name(date(), 0.7, Artifact::Page(2)),
            "calendar_2026-02-05_0.7_page_2.svg"
        );
        assert_eq!(
            artifact_name(date(), 0.5, Artifact::Cover),
            "calendar_2026-02-05_0.5_cover.svg"
        );
    }

    #[test]
    fn page_counts_follow_pagination() {
        for (scale, expected) in [(0.3, 2), (0.5, 2), (0.7, 3), (1.0, 6)] {
            let (layout, solar, islamic, _) = setup(scale);
            let pages = compose_pages(&layout, &solar, &islamic, PORTRAIT, date()).unwrap();
            assert_eq!(pages.len(), expected, "scale {scale}");

            // Every pair is drawn exactly once
            let strips: usize = pages.iter().map(|p| p.groups.len()).sum();
            assert_eq!(strips, 24, "scale {scale}");
        }
    }

    #[test]
    fn pairs_stack_down_a_column() {
        let (layout, solar, islamic, _) = setup(0.7);
        let pages = compose_pages(&layout, &solar, &islamic, PORTRAIT, date()).unwrap();
        let first_page = &pages[0];
        assert_eq!(first_page.groups.len(), 8);

        let centre_of = |g: &PlacedGroup| match &g.parts[0] {
            Primitive::RingSector(s) => s.sector.outer.start,
            _ => panic!("background first"),
        };
        let solar0 = centre_of(&first_page.groups[0]);
        let islamic0 = centre_of(&first_page.groups[1]);
        let solar1 = centre_of(&first_page.groups[2]);

        // All strips in a column share x; each pair sits lower than the last
        assert!((solar0.x - solar1.x).abs() < 1e-9);
        assert!(islamic0.y > solar0.y);
        assert!(solar1.y > islamic0.y);
    }

    #[test]
    fn second_column_is_offset() {
        let (layout, solar, islamic, _) = setup(0.3);
        let pages = compose_pages(&layout, &solar, &islamic, PORTRAIT, date()).unwrap();
        let first_page = &pages[0];
        assert_eq!(first_page.groups.len(), 20);

        let start_of = |g: &PlacedGroup| match &g.parts[0] {
            Primitive::RingSector(s) => s.sector.outer.start,
            _ => panic!("background first"),
        };
        let col0 = start_of(&first_page.groups[0]);
        let col1 = start_of(&first_page.groups[10]);
        let expected = (layout.ring_width * defaults::COLUMN_STEP_RATIO).raw();
        assert!((col1.x - col0.x - expected).abs() < 1e-9);
        assert!((col1.y - col0.y).abs() < 1e-9);
    }

    #[test]
    fn single_month_ring_has_no_pages() {
        let (layout, solar, islamic, _) = setup(0.7);
        let pages = compose_pages(&layout, &solar[..1], &islamic[..1], PORTRAIT, date()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn cover_places_every_strip() {
        let (layout, solar, islamic, alignment) = setup(0.7);
        let cover = compose_cover(&layout, &solar, &islamic, &alignment, PORTRAIT, date()).unwrap();
        assert_eq!(cover.groups.len(), 24);
        assert!(cover.groups.iter().all(|g| g.transform.is_some()));

        // January is centred at the top: zero rotation
        insta::assert_snapshot!(
            cover.groups[0].transform.as_deref().unwrap_or_default(),
            @"translate(75, 50) scale(0.3) rotate(0, 106.25, 288.3803) translate(0, 0)"
        );
    }

    #[test]
    fn cover_places_rings_of_unequal_length() {
        let (layout, solar, islamic, alignment) = setup(0.7);
        let cover =
            compose_cover(&layout, &solar[..2], &islamic, &alignment, PORTRAIT, date()).unwrap();
        assert_eq!(cover.groups.len(), 14);

        let cover =
            compose_cover(&layout, &solar, &islamic[..3], &alignment, PORTRAIT, date()).unwrap();
        assert_eq!(cover.groups.len(), 15);
    }

    #[test]
    fn cover_rotations_accumulate_before_adding() {
        let (layout, solar, islamic, alignment) = setup(0.7);
        let cover = compose_cover(&layout, &solar, &islamic, &alignment, PORTRAIT, date()).unwrap();

        let rotation_of = |g: &PlacedGroup| -> f64 {
            let t = g.transform.as_deref().unwrap_or_default();
            let start = t.find("rotate(").map(|i| i + 7).unwrap_or(0);
            let end = t[start..].find(',').map(|i| start + i).unwrap_or(t.len());
            t[start..end].parse().unwrap()
        };

        // February: running total 31 - 15.5 = 15.5, centre 15.5 + 14.5 = 30 days
        let feb = rotation_of(&cover.groups[2]);
        assert!((feb - 360.0 * 30.0 / 366.0).abs() < 1e-3);

        // First Hijri strip: days_elapsed 19.5 - 15 + 15 = 19.5 days
        let islamic0 = rotation_of(&cover.groups[1]);
        assert!((islamic0 - 360.0 * alignment.days_elapsed / 366.0).abs() < 1e-3);
    }
}
