//! Printable two-ring circular calendar.
//!
//! The outer ring holds the twelve Gregorian months, the inner ring the
//! twelve Hijri months, aligned so each Hijri day sits beside its Gregorian
//! counterpart. Months print as curved strips on paginated sheets; a cover
//! sheet shows the assembled circle.
//!
//! ```no_run
//! use miette::IntoDiagnostic;
//! use ringcal::{CalendarConfig, generate};
//!
//! let document = generate(&CalendarConfig::default())?;
//! for (name, svg) in document.render()? {
//!     std::fs::write(name, svg).into_diagnostic()?;
//! }
//! # Ok::<(), miette::Report>(())
//! ```

pub mod calendar;
pub mod compose;
pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod render;
pub mod types;

pub use compose::{CalendarDocument, Sheet};
pub use config::{CalendarConfig, PageOrientation};

use calendar::alignment::{HijriConverter, UmmAlQura, align};
use compose::{compose_cover, compose_pages};
use errors::LayoutError;
use layout::{Layout, build_islamic_month_instances, build_solar_month_instances};

/// Generate every sheet for `config` using Umm al-Qura conversion.
pub fn generate(config: &CalendarConfig) -> Result<CalendarDocument, miette::Report> {
    generate_with(config, &UmmAlQura)
}

/// Generate every sheet with a caller-supplied Hijri converter.
pub fn generate_with(
    config: &CalendarConfig,
    converter: &impl HijriConverter,
) -> Result<CalendarDocument, miette::Report> {
    let target = config.resolve_target();
    let alignment = align(converter, target, config.alignment)?;
    let layout = Layout::new(config.scale, config.days_in_year)?;

    let solar = build_solar_month_instances(&layout);
    let islamic = build_islamic_month_instances(&layout, &alignment);
    if solar.is_empty() {
        return Err(LayoutError::EmptyRing { ring: "solar" }.into());
    }
    if islamic.is_empty() {
        return Err(LayoutError::EmptyRing { ring: "Hijri" }.into());
    }

    // Artifacts are keyed by the Gregorian day the run is for
    let date = alignment.gregorian_date;
    let page_size = config.orientation.size();

    let pages = compose_pages(&layout, &solar, &islamic, page_size, date)?;
    let cover = compose_cover(&layout, &solar, &islamic, &alignment, page_size, date)?;

    Ok(CalendarDocument {
        alignment,
        layout,
        pages,
        cover,
    })
}
