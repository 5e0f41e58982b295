//! Lookup over the positioned days of one year.

use super::{year_positions, PositionedDay};
use serde::Serialize;

/// The positioned days of a year, with the lookups a slider needs to map
/// between dates and percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearTimeline {
    year: i32,
    days: Vec<PositionedDay>,
}

impl YearTimeline {
    pub fn new<S: AsRef<str>>(year: i32, marks: &[S]) -> Self {
        Self {
            year,
            days: year_positions(year, marks),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days(&self) -> &[PositionedDay] {
        &self.days
    }

    /// The day for a `YYYY-MM-DD` date, if it belongs to this year.
    pub fn position_of(&self, date: &str) -> Option<&PositionedDay> {
        // Days are in date order and the format sorts lexically within a year
        self.days
            .binary_search_by(|day| day.date.as_str().cmp(date))
            .ok()
            .map(|idx| &self.days[idx])
    }

    /// The day whose position is closest to `percent`, clamped to `0..=100`.
    ///
    /// Ties go to the earlier day.
    pub fn nearest(&self, percent: f64) -> Option<&PositionedDay> {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        let after = self.days.partition_point(|day| day.position < percent);
        let candidates = after.checked_sub(1).into_iter().chain(Some(after));
        candidates
            .filter_map(|idx| self.days.get(idx))
            .min_by(|a, b| {
                let da = (a.position - percent).abs();
                let db = (b.position - percent).abs();
                da.total_cmp(&db)
            })
    }

    /// Days carrying a month label, in order.
    pub fn labels(&self) -> impl Iterator<Item = &PositionedDay> + '_ {
        self.days.iter().filter(|day| day.label.is_some())
    }

    /// Marked days, in order.
    pub fn marked(&self) -> impl Iterator<Item = &PositionedDay> + '_ {
        self.days.iter().filter(|day| day.mark)
    }
}
