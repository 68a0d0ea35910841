//! Calendar data, date input, and solar/Hijri alignment.

pub mod alignment;
pub mod data;
pub mod date;

pub use alignment::{
    AlignmentMethod, CalendarAlignment, HijriConverter, UmmAlQura, align, rotate_months,
};
pub use date::{DateInput, HijriDate, TargetDate};
