//! Canonical month tables and palettes for both rings.

/// Static metadata for one calendar month.
///
/// `num_days` may list several variants; each variant prints as its own
/// strip. The stock tables carry exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    /// 1-based position. Canonical tables use calendar order; after
    /// [`rotate_months`](super::alignment::rotate_months) it is the
    /// presentation position.
    pub number: u32,
    pub name: &'static str,
    pub num_days: &'static [u32],
    pub color: &'static str,
}

/// An ordered list of months.
#[derive(Debug, Clone, Copy)]
pub struct Year {
    pub months: &'static [Month],
}

impl Year {
    /// Total days across the first variant of every month.
    pub const fn total_days(&self) -> u32 {
        let mut total = 0;
        let mut i = 0;
        while i < self.months.len() {
            if let Some(days) = self.months[i].num_days.first() {
                total += *days;
            }
            i += 1;
        }
        total
    }
}

/// Classic colour wheel, one hue per solar month.
pub const COLOR_WHEEL_CLASSIC: [&str; 12] = [
    "#aebbff", "#9ce3ff", "#a1fec5", "#caff8b", "#fdff92", "#fef087", "#ffdb8d", "#ffc08d",
    "#ffa290", "#ff90c0", "#feabf1", "#caa8fe",
];

/// Harmony palette used for the Hijri ring.
pub const COLOR_HARMONY: [&str; 12] = [
    "#FF9CB1", "#FFB99C", "#FFEA9C", "#E3FF9C", "#B1FF9C", "#9CFFB8", "#9CFFEA", "#9CE3FF",
    "#9CB2FF", "#B89CFF", "#EA9CFF", "#FF9CE3",
];

pub const SOLAR_COLORS: [&str; 12] = COLOR_WHEEL_CLASSIC;
pub const ISLAMIC_COLORS: [&str; 12] = COLOR_HARMONY;

/// Hijri month names, Muharram first.
pub const ISLAMIC_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi ath-Thani",
    "Jumada al-Awwal",
    "Jumada ath-Thani",
    "Rajab",
    "Sha'baan",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'dah",
    "Dhu al-Hijja",
];

const fn solar(number: u32, name: &'static str, num_days: &'static [u32]) -> Month {
    Month {
        number,
        name,
        num_days,
        color: SOLAR_COLORS[(number - 1) as usize],
    }
}

// Every Hijri strip prints 30 boxes; the ring's rotation absorbs 29-day months.
const fn islamic(number: u32) -> Month {
    Month {
        number,
        name: ISLAMIC_MONTH_NAMES[(number - 1) as usize],
        num_days: &[30],
        color: ISLAMIC_COLORS[(number - 1) as usize],
    }
}

/// Gregorian months, February printed with 29 days so leap years fit.
pub const SOLAR_MONTHS: [Month; 12] = [
    solar(1, "January", &[31]),
    solar(2, "February", &[29]),
    solar(3, "March", &[31]),
    solar(4, "April", &[30]),
    solar(5, "May", &[31]),
    solar(6, "June", &[30]),
    solar(7, "July", &[31]),
    solar(8, "August", &[31]),
    solar(9, "September", &[30]),
    solar(10, "October", &[31]),
    solar(11, "November", &[30]),
    solar(12, "December", &[31]),
];

pub const ISLAMIC_MONTHS: [Month; 12] = [
    islamic(1),
    islamic(2),
    islamic(3),
    islamic(4),
    islamic(5),
    islamic(6),
    islamic(7),
    islamic(8),
    islamic(9),
    islamic(10),
    islamic(11),
    islamic(12),
];

pub const SOLAR_YEAR: Year = Year {
    months: &SOLAR_MONTHS,
};

/// Hijri year in canonical (Muharram-first) order.
pub const ISLAMIC_YEAR_CANONICAL: Year = Year {
    months: &ISLAMIC_MONTHS,
};

/// Days the printed ring represents: the solar table, leap day included.
pub const DAYS_IN_YEAR: u32 = SOLAR_YEAR.total_days();
