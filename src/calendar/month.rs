use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

/// A validated (year, month) pair. Only constructed through `resolve`,
/// so `first_day` always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedMonth {
    year: i32,
    month: u32,
}

impl SelectedMonth {
    /// Out-of-range or missing values fall back to `today`'s year / month
    /// independently of each other.
    pub fn resolve(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> Self {
        let year = year
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .unwrap_or_else(|| today.year());
        let month = month
            .filter(|m| (1..=12).contains(m))
            .unwrap_or_else(|| today.month());

        Self { year, month }
    }

    /// Same as `resolve` but for raw query-string values; anything that is
    /// not an integer counts as missing.
    pub fn from_query(year: Option<&str>, month: Option<&str>, today: NaiveDate) -> Self {
        let year = year.and_then(|y| y.trim().parse::<i32>().ok());
        let month = month.and_then(|m| m.trim().parse::<u32>().ok());
        Self::resolve(year, month, today)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // year in [2000, 2100], month in [1, 12]
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn num_days(&self) -> u32 {
        // validated in resolve
        days_in_month(self.year, self.month).unwrap_or_default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// `[start, end)` timestamps covering the whole month.
    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let (next_year, next_month) = next_of(self.year, self.month);
        let start = self.first_day().and_time(chrono::NaiveTime::MIN);
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);
        (start, end)
    }

    /// e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Raw (year, month) of the previous month; may leave the accepted range.
    pub fn previous(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// Raw (year, month) of the next month; may leave the accepted range.
    pub fn next(&self) -> (i32, u32) {
        next_of(self.year, self.month)
    }
}

fn next_of(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Number of days in the given month, leap years included. `None` for a
/// month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = next_of(year, month);
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => u32::try_from((next - first).num_days()).ok(),
        _ => None,
    }
}
