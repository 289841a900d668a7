use chrono::NaiveDateTime;

use super::{StatLines, distinct_values};
use crate::format::group_thousands_signed;

/// Range of the non-missing values of a datetime column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatetimeSummary {
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
    pub distinct: usize,
}

impl DatetimeSummary {
    /// `None` when there are no values.
    pub fn from_values(values: &[NaiveDateTime], distinct: usize) -> Option<Self> {
        Some(Self {
            min: *values.iter().min()?,
            max: *values.iter().max()?,
            distinct,
        })
    }

    /// Whole days between the earliest and latest value.
    pub fn duration_days(&self) -> i64 {
        (self.max - self.min).num_days()
    }

    pub fn render(&self) -> StatLines {
        StatLines {
            stats: vec![
                format!("Min: {}", self.min.format("%Y-%m-%d")),
                format!("Max: {}", self.max.format("%Y-%m-%d")),
                format!(
                    "Duration: {} days",
                    group_thousands_signed(self.duration_days())
                ),
            ],
            freqs: vec![distinct_values(self.distinct)],
        }
    }

    /// Whole-day offset of each value from the minimum.
    pub fn day_offsets(&self, values: &[NaiveDateTime]) -> Vec<f64> {
        values
            .iter()
            .map(|value| (*value - self.min).num_days() as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn renders_range_and_duration() {
        let values = [at(2024, 3, 1, 12), at(2023, 1, 1, 0), at(2024, 3, 1, 6)];
        let summary = DatetimeSummary::from_values(&values, 3).expect("non-empty");
        let lines = summary.render();

        assert_eq!(
            lines.stats,
            vec!["Min: 2023-01-01", "Max: 2024-03-01", "Duration: 425 days"]
        );
        assert_eq!(lines.freqs, vec!["3 distinct values"]);
    }

    #[test]
    fn partial_days_are_truncated() {
        let values = [at(2024, 1, 1, 0), at(2024, 1, 2, 23)];
        let summary = DatetimeSummary::from_values(&values, 2).expect("non-empty");
        assert_eq!(summary.duration_days(), 1);
        assert_eq!(summary.day_offsets(&values), vec![0.0, 1.0]);
    }

    #[test]
    fn empty_values_have_no_summary() {
        assert!(DatetimeSummary::from_values(&[], 0).is_none());
    }
}
