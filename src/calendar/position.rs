//! Day-of-year positions along a yearly timeline.

use super::{number_of_days, year_grid};
use crate::constants::MONTH_LABEL_SUFFIX;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A day placed on the yearly timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedDay {
    /// `YYYY-MM-DD`
    pub date: String,
    /// 0-based day of the year
    pub index: usize,
    /// Percentage offset through the year, two decimals
    pub position: f64,
    /// `"<month>月"` on the first day of each month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Set for days listed in the caller's mark set
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub mark: bool,
}

/// `num / total` as a percentage rounded to two decimals.
///
/// Returns `0.0` when either argument is zero.
pub fn get_percentage(num: usize, total: usize) -> f64 {
    if num == 0 || total == 0 {
        return 0.0;
    }
    (num as f64 / total as f64 * 10_000.0).round() / 100.0
}

/// Every day of `year` with its timeline position.
///
/// The first day of each month carries a month label; days whose date
/// appears in `marks` are marked.
///
/// ```
/// use timeline_slider::calendar::year_positions;
///
/// let days = year_positions(2021, &["2021-02-28"]);
/// assert_eq!(days.len(), 365);
/// assert_eq!(days[0].label.as_deref(), Some("1月"));
/// assert!(days[58].mark);
/// ```
pub fn year_positions<S: AsRef<str>>(year: i32, marks: &[S]) -> Vec<PositionedDay> {
    let marks: HashSet<&str> = marks.iter().map(|mark| mark.as_ref()).collect();
    let total = number_of_days(year);

    let days: Vec<PositionedDay> = year_grid(year)
        .months
        .iter()
        .flat_map(|month| {
            month.days().map(move |cell| {
                let label = (cell.day == 1).then(|| format!("{}{}", month.month, MONTH_LABEL_SUFFIX));
                (cell, label)
            })
        })
        .enumerate()
        .map(|(index, (cell, label))| PositionedDay {
            date: cell.date.clone(),
            index,
            position: get_percentage(index, total),
            label,
            mark: marks.contains(cell.date.as_str()),
        })
        .collect();

    log::debug!(
        "Positioned {} days for {} ({} marked)",
        days.len(),
        year,
        days.iter().filter(|day| day.mark).count()
    );
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(get_percentage(0, 365), 0.0);
        assert_eq!(get_percentage(365, 365), 100.0);
        assert_eq!(get_percentage(5, 0), 0.0);
        assert_eq!(get_percentage(1, 3), 33.33);
        assert_eq!(get_percentage(2, 3), 66.67);
    }

    #[test]
    fn test_labels_on_month_starts() {
        let days = year_positions::<&str>(2024, &[]);
        let labelled: Vec<(usize, &str)> = days
            .iter()
            .filter_map(|day| day.label.as_deref().map(|label| (day.index, label)))
            .collect();
        assert_eq!(labelled.len(), 12);
        assert_eq!(labelled[0], (0, "1月"));
        assert_eq!(labelled[2], (60, "3月"));
        assert_eq!(labelled[11], (335, "12月"));
    }

    #[test]
    fn test_unknown_marks_are_ignored() {
        let days = year_positions(2021, &["2020-01-01", "2021-13-01"]);
        assert!(days.iter().all(|day| !day.mark));
    }

    #[test]
    fn test_serialized_shape() {
        let days = year_positions(2021, &["2021-01-02"]);
        let first = serde_json::to_value(&days[0]).unwrap();
        assert_eq!(
            first,
            serde_json::json!({ "date": "2021-01-01", "index": 0, "position": 0.0, "label": "1月" })
        );
        let second = serde_json::to_value(&days[1]).unwrap();
        assert_eq!(
            second,
            serde_json::json!({ "date": "2021-01-02", "index": 1, "position": 0.27, "mark": true })
        );
    }
}
