//! Solar/Hijri alignment.
//!
//! Works out which Hijri month is current for a target date, and how far
//! from Gregorian January 1 that month begins. The result positions the
//! inner ring so each Hijri day sits next to its Gregorian counterpart.
//!
//! The primary path asks a [`HijriConverter`] for exact dates. If the
//! converter cannot answer, a lunar-mean approximation anchored at
//! 1 Sha'ban 1447 takes over. A Hijri target that does not exist is an error.

use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta};
use icu_calendar::Date;
use icu_calendar::cal::HijriUmmAlQura;

use super::data::{ISLAMIC_MONTH_NAMES, Month};
use super::date::{HijriDate, TargetDate};
use crate::errors::AlignmentError;
use crate::log::{debug, info, warn};

/// Mean synodic month.
pub const LUNAR_MONTH_DAYS: f64 = 29.530588853;

/// Gregorian day of the lunar-mean anchor (1 Sha'ban 1447).
pub const ANCHOR_GREGORIAN: (i32, u32, u32) = (2026, 1, 20);
pub const ANCHOR_HIJRI_YEAR: i32 = 1447;
pub const ANCHOR_HIJRI_MONTH: u32 = 8;

/// Added to `days_elapsed` so month boundaries fall between day cells.
pub const CENTERING_OFFSET: f64 = 0.5;

/// Gregorian/Hijri conversion.
pub trait HijriConverter {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AlignmentError>;
    fn to_gregorian(&self, date: HijriDate) -> Result<NaiveDate, AlignmentError>;

    /// Gregorian date of the first day of a Hijri month.
    fn month_start(&self, year: i32, month: u32) -> Result<NaiveDate, AlignmentError> {
        self.to_gregorian(HijriDate { year, month, day: 1 })
    }
}

/// The Umm al-Qura calendar used in Saudi Arabia, backed by ICU4X.
#[derive(Debug, Clone, Copy, Default)]
pub struct UmmAlQura;

impl HijriConverter for UmmAlQura {
    fn to_hijri(&self, date: NaiveDate) -> Result<HijriDate, AlignmentError> {
        let out_of_range = || AlignmentError::OutOfRange {
            date: date.to_string(),
        };
        let month = u8::try_from(date.month()).map_err(|_| out_of_range())?;
        let day = u8::try_from(date.day()).map_err(|_| out_of_range())?;

        let iso = Date::try_new_iso(date.year(), month, day).map_err(|_| out_of_range())?;
        let hijri = iso.to_calendar(HijriUmmAlQura::new());
        Ok(HijriDate {
            year: hijri.extended_year(),
            month: u32::from(hijri.month().ordinal),
            day: u32::from(hijri.day_of_month().0),
        })
    }

    fn to_gregorian(&self, date: HijriDate) -> Result<NaiveDate, AlignmentError> {
        let out_of_range = || AlignmentError::OutOfRange {
            date: date.to_string(),
        };
        let month = u8::try_from(date.month).map_err(|_| out_of_range())?;
        let day = u8::try_from(date.day).map_err(|_| out_of_range())?;

        let hijri = Date::try_new_ummalqura(date.year, month, day).map_err(|e| {
            AlignmentError::NoSuchHijriDay {
                date: date.to_string(),
                reason: e.to_string(),
            }
        })?;
        let iso = hijri.to_iso();
        NaiveDate::from_ymd_opt(
            iso.extended_year(),
            u32::from(iso.month().ordinal),
            u32::from(iso.day_of_month().0),
        )
        .ok_or_else(out_of_range)
    }
}

/// How the alignment is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMethod {
    /// Exact conversion, falling back to the heuristic on failure
    #[default]
    Conversion,
    /// Lunar-mean arithmetic from the fixed anchor
    Heuristic,
}

/// Where the current Hijri month sits relative to Gregorian January 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarAlignment {
    /// 0-based, Muharram = 0
    pub current_month_index: usize,
    /// Days from January 1 to the first of the current Hijri month, plus 0.5.
    /// Negative when the month began in the previous Gregorian year.
    pub days_elapsed: f64,
    /// Negated whole days from January 1 to the month start; rotates Hijri
    /// numerals onto their Gregorian counterparts.
    pub rotation_offset: i64,
    pub gregorian_date: NaiveDate,
    /// 1-based
    pub hijri_month: u32,
    pub hijri_year: i32,
    /// The method that produced this value (after any fallback)
    pub method: AlignmentMethod,
}

impl CalendarAlignment {
    fn from_month_start(
        gregorian_date: NaiveDate,
        hijri_year: i32,
        hijri_month: u32,
        month_start: NaiveDate,
        method: AlignmentMethod,
    ) -> Result<Self, AlignmentError> {
        let jan1 = january_first(gregorian_date)?;
        let days = (month_start - jan1).num_days();
        Ok(Self {
            current_month_index: hijri_month.saturating_sub(1) as usize,
            days_elapsed: days as f64 + CENTERING_OFFSET,
            rotation_offset: -days,
            gregorian_date,
            hijri_month,
            hijri_year,
            method,
        })
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.current_month_index).unwrap_or_default()
    }
}

impl fmt::Display for CalendarAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.month_name();
        writeln!(f, "=== Islamic Calendar Alignment ===")?;
        writeln!(f, "Gregorian date: {}", self.gregorian_date)?;
        writeln!(f, "Hijri date: {name} {} AH", self.hijri_year)?;
        writeln!(f, "Current month index: {} ({name})", self.current_month_index)?;
        writeln!(f, "Days elapsed from Jan 1: {:.1}", self.days_elapsed)?;
        writeln!(f, "Rotation offset: {}", self.rotation_offset)?;
        write!(f, "==================================")
    }
}

fn january_first(date: NaiveDate) -> Result<NaiveDate, AlignmentError> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).ok_or_else(|| AlignmentError::OutOfRange {
        date: date.to_string(),
    })
}

fn anchor() -> Result<NaiveDate, AlignmentError> {
    let (y, m, d) = ANCHOR_GREGORIAN;
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| AlignmentError::OutOfRange {
        date: format!("{y}-{m}-{d}"),
    })
}

fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, AlignmentError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| AlignmentError::OutOfRange {
            date: format!("{date} + {days} days"),
        })
}

/// Exact alignment through `converter`.
pub fn align_by_conversion(
    converter: &impl HijriConverter,
    target: TargetDate,
) -> Result<CalendarAlignment, AlignmentError> {
    let (gregorian, hijri) = match target {
        TargetDate::Gregorian(d) => (d, converter.to_hijri(d)?),
        TargetDate::Hijri(h) => (converter.to_gregorian(h)?, h),
    };
    let month_start = converter.month_start(hijri.year, hijri.month)?;
    debug!(%gregorian, %hijri, %month_start, "converted target date");

    CalendarAlignment::from_month_start(
        gregorian,
        hijri.year,
        hijri.month,
        month_start,
        AlignmentMethod::Conversion,
    )
}

/// Months (signed) from Muharram of year 1 to the given Hijri month.
fn hijri_month_count(year: i32, month: u32) -> i64 {
    (i64::from(year) - 1) * 12 + i64::from(month) - 1
}

/// Approximate Gregorian date for a Hijri date, by whole lunar-mean months
/// from the anchor.
pub fn approximate_gregorian(date: HijriDate) -> Result<NaiveDate, AlignmentError> {
    let months = hijri_month_count(date.year, date.month)
        - hijri_month_count(ANCHOR_HIJRI_YEAR, ANCHOR_HIJRI_MONTH);
    let days = months as f64 * LUNAR_MONTH_DAYS + f64::from(date.day) - 1.0;
    add_days(anchor()?, days.floor() as i64)
}

/// Lunar-mean alignment. Within a month and a few days of the exact answer
/// for dates near the anchor.
pub fn align_heuristic(target: TargetDate) -> Result<CalendarAlignment, AlignmentError> {
    let anchor = anchor()?;
    let gregorian = match target {
        TargetDate::Gregorian(d) => d,
        TargetDate::Hijri(h) => approximate_gregorian(h)?,
    };

    let days_since_anchor = (gregorian - anchor).num_days();
    let month_offset = (days_since_anchor as f64 / LUNAR_MONTH_DAYS).floor() as i64;

    let months_from_muharram = i64::from(ANCHOR_HIJRI_MONTH - 1) + month_offset;
    let hijri_month = months_from_muharram.rem_euclid(12) as u32 + 1;
    let hijri_year = ANCHOR_HIJRI_YEAR + months_from_muharram.div_euclid(12) as i32;

    let month_start = add_days(
        anchor,
        (month_offset as f64 * LUNAR_MONTH_DAYS).floor() as i64,
    )?;
    debug!(%gregorian, month_offset, %month_start, "estimated month start");

    CalendarAlignment::from_month_start(
        gregorian,
        hijri_year,
        hijri_month,
        month_start,
        AlignmentMethod::Heuristic,
    )
}

/// Compute the alignment for `target` with the requested method.
///
/// A conversion failure is logged and answered with the heuristic, unless
/// the target itself does not exist. Heuristic failures (dates outside
/// chrono's range) are returned as well.
pub fn align(
    converter: &impl HijriConverter,
    target: TargetDate,
    method: AlignmentMethod,
) -> Result<CalendarAlignment, AlignmentError> {
    let alignment = match method {
        AlignmentMethod::Heuristic => align_heuristic(target)?,
        AlignmentMethod::Conversion => match align_by_conversion(converter, target) {
            Ok(alignment) => alignment,
            Err(err) if !err.is_recoverable() => return Err(err),
            Err(err) => {
                warn!(%err, "Hijri conversion failed, using lunar-mean approximation");
                align_heuristic(target)?
            }
        },
    };

    info!(
        month = alignment.month_name(),
        hijri_year = alignment.hijri_year,
        days_elapsed = alignment.days_elapsed,
        rotation_offset = alignment.rotation_offset,
        method = ?alignment.method,
        "aligned calendars"
    );
    Ok(alignment)
}

/// Reorder `months` to start at `start`, wrapping, and renumber them 1..=n
/// by their new position.
pub fn rotate_months(months: &[Month], start: usize) -> Vec<Month> {
    let n = months.len();
    (0..n)
        .map(|i| Month {
            number: (i + 1) as u32,
            ..months[(start + i) % n]
        })
        .collect()
}

/// Hijri month name for a 0-based index.
pub fn month_name(index: usize) -> Option<&'static str> {
    ISLAMIC_MONTH_NAMES.get(index).copied()
}
