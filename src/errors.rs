//! Error types with rich diagnostics using miette
//!
//! Each pipeline stage has its own enum so a failure always names the stage
//! (input, alignment, layout, geometry, render) and the offending value.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (flag name or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Input Errors
// ============================================================================

/// Errors raised while reading a target date
#[derive(Error, Diagnostic, Debug)]
pub enum DateError {
    #[error("malformed date: {reason}")]
    #[diagnostic(
        code(ringcal::input::malformed),
        help("dates are written YYYY-MM-DD (or YY-MM-DD)")
    )]
    Malformed {
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected digits here")]
        span: SourceSpan,
    },

    #[error("month {month} is out of range")]
    #[diagnostic(code(ringcal::input::month_out_of_range), help("months run from 1 to 12"))]
    MonthOutOfRange {
        month: u32,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a month")]
        span: SourceSpan,
    },

    #[error("day {day} is out of range")]
    #[diagnostic(code(ringcal::input::day_out_of_range), help("days run from 1 to {max}"))]
    DayOutOfRange {
        day: u32,
        max: u32,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a day")]
        span: SourceSpan,
    },

    #[error("{year}-{month:02}-{day:02} does not exist in the Gregorian calendar")]
    #[diagnostic(code(ringcal::input::no_such_day))]
    NoSuchDay {
        year: i32,
        month: u32,
        day: u32,
        #[source_code]
        src: NamedSource<String>,
        #[label("no such day")]
        span: SourceSpan,
    },

    #[error("both a Gregorian and a Hijri date were given")]
    #[diagnostic(
        code(ringcal::input::conflicting_inputs),
        help("pass either --date or --hijri, not both")
    )]
    ConflictingInputs,
}

// ============================================================================
// Alignment Errors
// ============================================================================

/// Errors from the Gregorian/Hijri conversion capability.
///
/// Recoverable variants never reach the user: the alignment engine logs them
/// and falls back to lunar-mean arithmetic.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum AlignmentError {
    #[error("calendar conversion unavailable: {reason}")]
    #[diagnostic(code(ringcal::alignment::conversion_unavailable))]
    ConversionUnavailable { reason: String },

    #[error("date {date} is outside the supported conversion range")]
    #[diagnostic(code(ringcal::alignment::out_of_range))]
    OutOfRange { date: String },

    #[error("{date} does not exist in the Umm al-Qura calendar: {reason}")]
    #[diagnostic(
        code(ringcal::alignment::no_such_hijri_day),
        help("Hijri months have 29 or 30 days depending on the month and year")
    )]
    NoSuchHijriDay { date: String, reason: String },
}

impl AlignmentError {
    /// Whether the heuristic can stand in for the failed conversion.
    ///
    /// A target date that does not exist is an input error, not a missing
    /// capability.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AlignmentError::NoSuchHijriDay { .. })
    }
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors in layout parameters
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("invalid scale: {value}")]
    #[diagnostic(
        code(ringcal::layout::invalid_scale),
        help("scale must be a positive, finite number")
    )]
    InvalidScale { value: f64 },

    #[error("invalid days in year: {value}")]
    #[diagnostic(code(ringcal::layout::invalid_days_in_year))]
    InvalidDaysInYear { value: u32 },

    #[error("{ring} ring has no months")]
    #[diagnostic(code(ringcal::layout::empty_ring))]
    EmptyRing { ring: &'static str },
}

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors from arc and annular-sector construction
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("inner radius {inner} is not smaller than outer radius {outer}")]
    #[diagnostic(
        code(ringcal::geometry::inverted_radii),
        help("an annular sector needs inner < outer or its path self-intersects")
    )]
    InvertedRadii { inner: f64, outer: f64 },

    #[error("zero-width arc at {angle}°")]
    #[diagnostic(code(ringcal::geometry::degenerate_arc))]
    DegenerateArc { angle: f64 },

    #[error("arc angle {angle} is not finite")]
    #[diagnostic(code(ringcal::geometry::non_finite_angle))]
    NonFiniteAngle { angle: f64 },

    #[error("invalid radius: {value}")]
    #[diagnostic(code(ringcal::geometry::invalid_radius))]
    InvalidRadius { value: f64 },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors while serializing or writing sheets
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("failed to serialize {artifact}: {message}")]
    #[diagnostic(code(ringcal::render::serialize))]
    Serialize { artifact: String, message: String },

    #[error("failed to write {path}")]
    #[diagnostic(code(ringcal::render::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
