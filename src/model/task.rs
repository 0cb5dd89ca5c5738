use chrono::NaiveDate;
use egui::Color32;
use uuid::Uuid;

/// Colour used when no palette colour was assigned.
pub const DEFAULT_TASK_COLOR: Color32 = Color32::from_rgb(0x1E, 0xAE, 0xDB);

/// A single scheduled task on the annual chart.
///
/// Records are replaced wholesale when edited; the chart never patches a
/// single field in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDate,
    /// Expected to be on or after `start`, but not enforced.
    pub end: NaiveDate,
    /// Display color for the task bar, fixed at creation.
    pub color: Color32,
}

impl Task {
    /// Create a new task with a fresh identifier.
    pub fn new(title: impl Into<String>, start: NaiveDate, end: NaiveDate, color: Color32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end,
            color,
        }
    }

    /// Copy of this record with new dates. Identity, title and colour are kept.
    pub fn with_dates(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    /// Number of days between start and end (negative for inverted ranges).
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Duration line for the tooltip, counted the same way as
    /// [`Task::duration_days`].
    pub fn duration_label(&self) -> String {
        match self.duration_days() {
            1 => "1 day".to_string(),
            n => format!("{} days", n),
        }
    }

    /// Tooltip text shown while hovering or dragging a bar.
    pub fn date_range_label(&self) -> String {
        format!(
            "{} ~ {}",
            self.start.format("%Y/%m/%d"),
            self.end.format("%Y/%m/%d"),
        )
    }
}
