//! Run configuration.

use chrono::NaiveDate;

use crate::calendar::data::DAYS_IN_YEAR;
use crate::calendar::date::{DateInput, TargetDate};
use crate::types::Length;

pub use crate::calendar::alignment::AlignmentMethod;

/// Default print scale.
pub const DEFAULT_SCALE: f64 = 0.7;

/// Sheet orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrientation {
    /// 8.5 × 11 in
    #[default]
    Portrait,
    /// 11 × 8.5 in
    Landscape,
}

impl PageOrientation {
    /// `(width, height)` of a sheet.
    pub fn size(self) -> (Length, Length) {
        let short = Length::inches(8.5);
        let long = Length::inches(11.0);
        match self {
            PageOrientation::Portrait => (short, long),
            PageOrientation::Landscape => (long, short),
        }
    }
}

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub target: DateInput,
    pub scale: f64,
    pub days_in_year: u32,
    pub orientation: PageOrientation,
    pub alignment: AlignmentMethod,
    /// Overrides the wall clock when `target` is `Today`.
    pub today: Option<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            target: DateInput::Today,
            scale: DEFAULT_SCALE,
            days_in_year: DAYS_IN_YEAR,
            orientation: PageOrientation::Portrait,
            alignment: AlignmentMethod::Conversion,
            today: None,
        }
    }
}

impl CalendarConfig {
    /// Resolve the target date. Reads the clock at most once.
    pub fn resolve_target(&self) -> TargetDate {
        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        self.target.resolve(today)
    }
}
