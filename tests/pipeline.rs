//! End-to-end generation: config in, named SVG sheets out.

use chrono::NaiveDate;
use ringcal::calendar::{DateInput, HijriDate};
use ringcal::config::AlignmentMethod;
use ringcal::{CalendarConfig, PageOrientation, generate};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn heuristic_config() -> CalendarConfig {
    CalendarConfig {
        alignment: AlignmentMethod::Heuristic,
        today: Some(ymd(2026, 2, 5)),
        ..Default::default()
    }
}

fn attr<'a>(element: &'a str, name: &str) -> Option<&'a str> {
    let pattern = format!("{name}=\"");
    let start = element.find(&pattern)? + pattern.len();
    let rest = &element[start..];
    Some(&rest[..rest.find('"')?])
}

#[test]
fn default_run_produces_cover_and_pages() {
    let document = generate(&heuristic_config()).unwrap();

    assert_eq!(document.alignment.current_month_index, 7);
    assert_eq!(document.alignment.hijri_year, 1447);
    assert_eq!(document.pages.len(), 3);
    assert_eq!(document.cover.groups.len(), 24);

    let names: Vec<_> = document.sheets().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "calendar_2026-02-05_0.7_cover.svg",
            "calendar_2026-02-05_0.7_page_0.svg",
            "calendar_2026-02-05_0.7_page_1.svg",
            "calendar_2026-02-05_0.7_page_2.svg",
        ]
    );
}

#[test]
fn hijri_target_keys_artifacts_by_gregorian_day() {
    let config = CalendarConfig {
        target: DateInput::Hijri(HijriDate::new(1447, 8, 17).unwrap()),
        ..heuristic_config()
    };
    let document = generate(&config).unwrap();

    assert_eq!(document.alignment.gregorian_date, ymd(2026, 2, 5));
    assert_eq!(document.alignment.hijri_month, 8);
    assert_eq!(document.cover.name, "calendar_2026-02-05_0.7_cover.svg");
}

#[test]
fn conversion_agrees_with_heuristic_on_month() {
    let exact = generate(&CalendarConfig {
        alignment: AlignmentMethod::Conversion,
        ..heuristic_config()
    })
    .unwrap();
    let approx = generate(&heuristic_config()).unwrap();

    assert_eq!(
        exact.alignment.current_month_index,
        approx.alignment.current_month_index
    );
    assert_eq!(exact.pages.len(), approx.pages.len());
}

#[test]
fn rendering_is_deterministic() {
    let first = generate(&heuristic_config()).unwrap().render().unwrap();
    let second = generate(&heuristic_config()).unwrap().render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_sheet_is_an_svg_with_its_own_text_paths() {
    let document = generate(&heuristic_config()).unwrap();
    let rendered = document.render().unwrap();
    assert_eq!(rendered.len(), 4);

    for (name, svg) in &rendered {
        assert!(svg.contains("<svg"), "{name}");
        assert!(svg.contains("textPath"), "{name}");
        // Ids restart on each sheet
        assert!(svg.contains("textpath-0"), "{name}");
    }

    let cover = &rendered[0].1;
    assert!(cover.contains("rotate("));
    assert!(cover.contains("Sha"));
    assert!(cover.contains("January"));
}

#[test]
fn sheet_dimensions_follow_orientation() {
    let portrait = generate(&heuristic_config()).unwrap().render().unwrap();
    let root = &portrait[0].1[portrait[0].1.find("<svg").unwrap()..];
    assert_eq!(attr(root, "width"), Some("212.5mm"));
    assert_eq!(attr(root, "height"), Some("275mm"));

    let landscape = generate(&CalendarConfig {
        orientation: PageOrientation::Landscape,
        ..heuristic_config()
    })
    .unwrap()
    .render()
    .unwrap();
    let root = &landscape[0].1[landscape[0].1.find("<svg").unwrap()..];
    assert_eq!(attr(root, "width"), Some("275mm"));
    assert_eq!(attr(root, "height"), Some("212.5mm"));
}

#[test]
fn smaller_scale_fits_more_per_page() {
    let document = generate(&CalendarConfig {
        scale: 0.3,
        ..heuristic_config()
    })
    .unwrap();
    assert_eq!(document.pages.len(), 2);
    assert_eq!(document.pages[0].groups.len(), 20);
    assert!(document.cover.name.contains("_0.3_"));
}

#[test]
fn invalid_scale_is_rejected() {
    for scale in [0.0, -1.0, f64::NAN] {
        let result = generate(&CalendarConfig {
            scale,
            ..heuristic_config()
        });
        assert!(result.is_err(), "scale {scale}");
    }
}

#[test]
fn zero_days_in_year_is_rejected() {
    let result = generate(&CalendarConfig {
        days_in_year: 0,
        ..heuristic_config()
    });
    assert!(result.is_err());
}

#[test]
fn only_cover_groups_carry_transforms() {
    let document = generate(&heuristic_config()).unwrap();

    // Strips are placed by absolute coordinates, only cover groups transform
    assert!(document.pages.iter().flat_map(|p| &p.groups).all(|g| g.transform.is_none()));

    let transforms: Vec<_> = document
        .cover
        .groups
        .iter()
        .take(4)
        .map(|g| g.transform.clone().unwrap_or_default())
        .collect();
    insta::assert_snapshot!(transforms.join("\n"), @r"
    translate(75, 50) scale(0.3) rotate(0, 106.25, 288.3803) translate(0, 0)
    translate(75, 50) scale(0.3) rotate(19.1803, 106.25, 288.3803) translate(0, 0)
    translate(75, 50) scale(0.3) rotate(29.5082, 106.25, 288.3803) translate(0, 0)
    translate(75, 50) scale(0.3) rotate(48.6885, 106.25, 288.3803) translate(0, 0)
    ");
}

#[test]
fn nonexistent_hijri_day_fails_the_run() {
    // Sha'ban 1447 has 29 days; the run must not fall back to estimation
    let config = CalendarConfig {
        target: DateInput::Hijri(HijriDate::new(1447, 8, 30).unwrap()),
        alignment: AlignmentMethod::Conversion,
        ..heuristic_config()
    };
    let err = generate(&config).unwrap_err();
    assert!(err.to_string().contains("does not exist"), "{err}");

    let valid = CalendarConfig {
        target: DateInput::Hijri(HijriDate::new(1447, 8, 29).unwrap()),
        ..config
    };
    assert_eq!(generate(&valid).unwrap().alignment.hijri_month, 8);
}
