//! Target-date input: parsing and validation.
//!
//! Both calendars are written `YYYY-MM-DD`. A two-digit year is shorthand
//! for the current century of that calendar (`26` is 2026, `47` is 1447).

use chrono::NaiveDate;
use miette::SourceSpan;

use crate::errors::{DateError, SourceContext};

/// Longest Hijri month.
pub const HIJRI_MAX_DAY: u32 = 30;

/// A day in the Hijri calendar, 1-based month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Returns `None` unless `month` is 1..=12 and `day` is 1..=30.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        ((1..=12).contains(&month) && (1..=HIJRI_MAX_DAY).contains(&day))
            .then_some(Self { year, month, day })
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

/// Which day a calendar is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateInput {
    /// The wall-clock date at the start of the run
    #[default]
    Today,
    Gregorian(NaiveDate),
    Hijri(HijriDate),
}

impl DateInput {
    /// Build from the optional `--date` / `--hijri` strings. At most one may
    /// be present.
    pub fn from_flags(date: Option<&str>, hijri: Option<&str>) -> Result<Self, DateError> {
        match (date, hijri) {
            (Some(_), Some(_)) => Err(DateError::ConflictingInputs),
            (Some(d), None) => parse_gregorian("--date", d).map(DateInput::Gregorian),
            (None, Some(h)) => parse_hijri("--hijri", h).map(DateInput::Hijri),
            (None, None) => Ok(DateInput::Today),
        }
    }

    /// Pin `Today` to a concrete day.
    pub fn resolve(self, today: NaiveDate) -> TargetDate {
        match self {
            DateInput::Today => TargetDate::Gregorian(today),
            DateInput::Gregorian(d) => TargetDate::Gregorian(d),
            DateInput::Hijri(h) => TargetDate::Hijri(h),
        }
    }
}

/// A resolved target date in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDate {
    Gregorian(NaiveDate),
    Hijri(HijriDate),
}

/// One `-`-separated field and where it sits in the input.
struct Field<'a> {
    text: &'a str,
    span: SourceSpan,
}

struct Fields<'a> {
    ctx: SourceContext,
    year: Field<'a>,
    month: Field<'a>,
    day: Field<'a>,
}

fn split_fields<'a>(name: &str, input: &'a str) -> Result<Fields<'a>, DateError> {
    let ctx = SourceContext::new(name, input);

    let mut fields = Vec::with_capacity(3);
    let mut offset = 0;
    for text in input.split('-') {
        fields.push(Field {
            text,
            span: (offset, text.len()).into(),
        });
        offset += text.len() + 1;
    }

    for field in &fields {
        if field.text.is_empty() || !field.text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Malformed {
                reason: format!("'{}' is not a number", field.text),
                src: ctx.named_source(),
                span: field.span,
            });
        }
    }

    let [year, month, day]: [Field<'a>; 3] =
        fields.try_into().map_err(|fields: Vec<Field<'a>>| DateError::Malformed {
            reason: format!("expected 3 fields, found {}", fields.len()),
            src: ctx.named_source(),
            span: (0, input.len()).into(),
        })?;

    Ok(Fields {
        ctx,
        year,
        month,
        day,
    })
}

fn number(ctx: &SourceContext, field: &Field<'_>) -> Result<u32, DateError> {
    field.text.parse().map_err(|_| DateError::Malformed {
        reason: format!("'{}' is too large", field.text),
        src: ctx.named_source(),
        span: field.span,
    })
}

/// Expand a 2- or 4-digit year; `century` is prepended to short years.
fn year(ctx: &SourceContext, field: &Field<'_>, century: i32) -> Result<i32, DateError> {
    let value = number(ctx, field)? as i32;
    match field.text.len() {
        4 => Ok(value),
        2 => Ok(century + value),
        n => Err(DateError::Malformed {
            reason: format!("year has {n} digits, expected 2 or 4"),
            src: ctx.named_source(),
            span: field.span,
        }),
    }
}

fn month(ctx: &SourceContext, field: &Field<'_>) -> Result<u32, DateError> {
    let value = number(ctx, field)?;
    if (1..=12).contains(&value) {
        Ok(value)
    } else {
        Err(DateError::MonthOutOfRange {
            month: value,
            src: ctx.named_source(),
            span: field.span,
        })
    }
}

fn day(ctx: &SourceContext, field: &Field<'_>, max: u32) -> Result<u32, DateError> {
    let value = number(ctx, field)?;
    if (1..=max).contains(&value) {
        Ok(value)
    } else {
        Err(DateError::DayOutOfRange {
            day: value,
            max,
            src: ctx.named_source(),
            span: field.span,
        })
    }
}

/// Parse a Gregorian `YYYY-MM-DD` (or `YY-MM-DD`, meaning 20YY).
pub fn parse_gregorian(name: &str, input: &str) -> Result<NaiveDate, DateError> {
    let fields = split_fields(name, input)?;
    let ctx = &fields.ctx;
    let y = year(ctx, &fields.year, 2000)?;
    let m = month(ctx, &fields.month)?;
    let d = day(ctx, &fields.day, 31)?;

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| DateError::NoSuchDay {
        year: y,
        month: m,
        day: d,
        src: ctx.named_source(),
        span: (0, input.len()).into(),
    })
}

/// Parse a Hijri `YYYY-MM-DD` (or `YY-MM-DD`, meaning 14YY).
pub fn parse_hijri(name: &str, input: &str) -> Result<HijriDate, DateError> {
    let fields = split_fields(name, input)?;
    let ctx = &fields.ctx;
    let y = year(ctx, &fields.year, 1400)?;
    let m = month(ctx, &fields.month)?;
    let d = day(ctx, &fields.day, HIJRI_MAX_DAY)?;
    Ok(HijriDate {
        year: y,
        month: m,
        day: d,
    })
}
