use chrono::{Datelike, NaiveDate};

use super::task::Task;

/// Fixed axis length. Leap days are not accounted for: Dec 31 of a leap
/// year sits at offset 365, on the right edge of the grid.
pub const DAYS_IN_YEAR: i64 = 365;

/// Horizontal placement of a bar, in percent of the chart width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPosition {
    pub left: f32,
    pub width: f32,
}

/// A month boundary on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthMark {
    pub month: u32,
    /// Offset of the first day, in percent of the chart width.
    pub offset: f32,
}

impl MonthMark {
    /// Header label, e.g. `3月`.
    pub fn label(&self) -> String {
        format!("{}月", self.month)
    }
}

/// Maps dates onto a 365-day axis starting January 1 of a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAxis {
    year: i32,
    start: NaiveDate,
}

impl YearAxis {
    /// Returns `None` for years chrono cannot represent.
    pub fn new(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(|start| Self { year, start })
    }

    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(today.year()).unwrap_or(Self {
            year: today.year(),
            start: today,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn next(&self) -> Option<Self> {
        Self::new(self.year + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::new(self.year - 1)
    }

    /// Signed day offset of `date` from January 1.
    pub fn days_from_year_start(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Unclamped placement: bars may extend past either edge.
    pub fn position(&self, task: &Task) -> BarPosition {
        let start = self.days_from_year_start(task.start);
        let end = self.days_from_year_start(task.end);
        BarPosition {
            left: percent(start),
            width: percent(end - start),
        }
    }

    /// Placement clamped to the visible year. Tasks lying entirely outside
    /// the year are filtered out.
    pub fn clamped_position(&self, task: &Task) -> Option<BarPosition> {
        let start = self.days_from_year_start(task.start);
        let end = self.days_from_year_start(task.end);
        if end < 0 || start > DAYS_IN_YEAR {
            return None;
        }
        let start = start.clamp(0, DAYS_IN_YEAR);
        let end = end.clamp(0, DAYS_IN_YEAR);
        Some(BarPosition {
            left: percent(start),
            width: percent(end - start),
        })
    }

    /// The twelve month boundaries of the year.
    pub fn month_marks(&self) -> Vec<MonthMark> {
        (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(self.year, month, 1))
            .map(|first_day| MonthMark {
                month: first_day.month(),
                offset: percent(self.days_from_year_start(first_day)),
            })
            .collect()
    }
}

fn percent(days: i64) -> f32 {
    days as f32 / DAYS_IN_YEAR as f32 * 100.0
}
