//! Pointer drag state machine for task bars.
//!
//! A gesture starts with [`DragController::pointer_down`], emits an updated
//! task on every [`DragController::pointer_move`], and ends with
//! [`DragController::pointer_up`]. The controller holds at most one
//! [`DragSession`]; nothing survives from one gesture to the next.

use chrono::Duration;
use uuid::Uuid;

use super::task::Task;
use super::year_axis::{YearAxis, DAYS_IN_YEAR};

/// Default dead-zone around a bar edge that selects a resize, in pixels.
pub const DEFAULT_RESIZE_EDGE_PX: f32 = 10.0;

/// Minimum task length produced by a resize, in days.
pub const MIN_DURATION_DAYS: i64 = 1;

/// What a gesture does to the task it grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    ResizeLeft,
    ResizeRight,
}

impl DragMode {
    /// Pick a mode from where the pointer went down on a bar.
    ///
    /// Coordinates are pixels in the same space as `bar`. Narrow bars shrink
    /// the edge zone to a third of their width so the middle still moves.
    pub fn from_pointer(pointer_x: f32, bar: BarGeometry, edge_px: f32) -> Self {
        if bar.width <= 0.0 {
            return DragMode::Move;
        }
        let threshold = edge_px.max(0.0).min(bar.width / 3.0);
        let offset = pointer_x - bar.left;
        if offset <= threshold {
            DragMode::ResizeLeft
        } else if bar.width - offset <= threshold {
            DragMode::ResizeRight
        } else {
            DragMode::Move
        }
    }
}

/// Pixel placement of a bar relative to the chart's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f32,
    pub width: f32,
}

/// State of one gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone)]
pub struct DragSession {
    original: Task,
    current: Task,
    mode: DragMode,
    origin_x: f32,
    container_width: f32,
    axis: YearAxis,
}

impl DragSession {
    pub fn new(
        task: &Task,
        mode: DragMode,
        origin_x: f32,
        container_width: f32,
        axis: YearAxis,
    ) -> Self {
        Self {
            original: task.clone(),
            current: task.clone(),
            mode,
            origin_x,
            container_width,
            axis,
        }
    }

    pub fn task_id(&self) -> Uuid {
        self.original.id
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// The record as of the last pointer move.
    pub fn current(&self) -> &Task {
        &self.current
    }

    /// Whole days covered by the pointer since the gesture started,
    /// rounded half away from zero.
    pub fn day_delta(&self, pointer_x: f32) -> i64 {
        if !self.container_width.is_finite() || self.container_width <= 0.0 || !pointer_x.is_finite() {
            return 0;
        }
        let delta_px = pointer_x - self.origin_x;
        (delta_px * DAYS_IN_YEAR as f32 / self.container_width).round() as i64
    }

    /// Dates the task would have with the pointer at `pointer_x`.
    ///
    /// Moves keep the bar inside the year window; resizes keep at least
    /// [`MIN_DURATION_DAYS`]. A bar already past an edge is not pulled back
    /// by the window clamp alone. A pointer that has not covered a whole day
    /// leaves the record untouched, even when it is shorter than the minimum.
    pub fn apply(&self, pointer_x: f32) -> Task {
        let raw = self.day_delta(pointer_x);
        if raw == 0 {
            return self.original.clone();
        }
        let start = self.axis.days_from_year_start(self.original.start);
        let end = self.axis.days_from_year_start(self.original.end);

        let (new_start, new_end) = match self.mode {
            DragMode::Move => {
                let lowest = (-start).min(0);
                let highest = (DAYS_IN_YEAR - end).max(0);
                let delta = raw.clamp(lowest, highest);
                (start + delta, end + delta)
            }
            DragMode::ResizeLeft => {
                let new_start = start
                    .saturating_add(raw)
                    .max(start.min(0))
                    .min(end - MIN_DURATION_DAYS);
                (new_start, end)
            }
            DragMode::ResizeRight => {
                let new_end = end
                    .saturating_add(raw)
                    .min(end.max(DAYS_IN_YEAR))
                    .max(start + MIN_DURATION_DAYS);
                (start, new_end)
            }
        };

        self.original.with_dates(
            self.original.start + Duration::days(new_start - start),
            self.original.end + Duration::days(new_end - end),
        )
    }
}

/// Owns the in-flight gesture, if any.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self, task_id: Uuid) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.task_id() == task_id)
    }

    /// Start a gesture. Any session left over from an earlier gesture is
    /// discarded.
    pub fn pointer_down(&mut self, session: DragSession) {
        if let Some(stale) = self.session.take() {
            log::debug!("Discarding unfinished drag on task {}", stale.task_id());
        }
        log::debug!(
            "Drag started on '{}' ({:?})",
            session.original.title,
            session.mode
        );
        self.session = Some(session);
    }

    /// Returns the updated record to hand to the owner, or `None` when no
    /// gesture is active.
    pub fn pointer_move(&mut self, pointer_x: f32) -> Option<Task> {
        let session = self.session.as_mut()?;
        let updated = session.apply(pointer_x);
        session.current = updated.clone();
        Some(updated)
    }

    /// End the gesture wherever the pointer was released. Returns the final
    /// record of the finished gesture.
    pub fn pointer_up(&mut self) -> Option<Task> {
        let session = self.session.take()?;
        log::debug!(
            "Drag finished on '{}': {}",
            session.current.title,
            session.current.date_range_label()
        );
        Some(session.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::DEFAULT_TASK_COLOR;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn axis() -> YearAxis {
        YearAxis::new(2024).unwrap()
    }

    fn task(start: NaiveDate, end: NaiveDate) -> Task {
        Task::new("a", start, end, DEFAULT_TASK_COLOR)
    }

    fn begin(t: &Task, mode: DragMode, width: f32) -> DragController {
        let mut controller = DragController::new();
        controller.pointer_down(DragSession::new(t, mode, 500.0, width, axis()));
        controller
    }

    #[test]
    fn test_mode_from_pointer() {
        let bar = BarGeometry {
            left: 100.0,
            width: 200.0,
        };
        assert_eq!(DragMode::from_pointer(104.0, bar, 10.0), DragMode::ResizeLeft);
        assert_eq!(DragMode::from_pointer(295.0, bar, 10.0), DragMode::ResizeRight);
        assert_eq!(DragMode::from_pointer(200.0, bar, 10.0), DragMode::Move);
        assert_eq!(DragMode::from_pointer(111.0, bar, 10.0), DragMode::Move);
    }

    #[test]
    fn test_mode_on_narrow_bar_keeps_a_move_zone() {
        let bar = BarGeometry {
            left: 0.0,
            width: 12.0,
        };
        assert_eq!(DragMode::from_pointer(6.0, bar, 10.0), DragMode::Move);
        assert_eq!(DragMode::from_pointer(2.0, bar, 10.0), DragMode::ResizeLeft);
        assert_eq!(DragMode::from_pointer(11.0, bar, 10.0), DragMode::ResizeRight);
    }

    #[test]
    fn test_move_example_scenario() {
        let t = task(date(2024, 3, 1), date(2024, 3, 10));
        let mut drag = begin(&t, DragMode::Move, 1000.0);
        // 100px * 365 / 1000px = 36.5 days, rounded away from zero.
        let moved = drag.pointer_move(600.0).unwrap();
        assert_eq!(moved.id, t.id);
        assert_eq!(moved.start, date(2024, 4, 7));
        assert_eq!(moved.end, date(2024, 4, 16));
    }

    #[test]
    fn test_move_ten_days_preserves_duration() {
        let t = task(date(2024, 5, 1), date(2024, 5, 20));
        // 730px container: 2px per day.
        let mut drag = begin(&t, DragMode::Move, 730.0);
        let moved = drag.pointer_move(520.0).unwrap();
        assert_eq!(moved.start, date(2024, 5, 11));
        assert_eq!(moved.end, date(2024, 5, 30));
        assert_eq!(moved.duration_days(), t.duration_days());

        let back = drag.pointer_move(480.0).unwrap();
        assert_eq!(back.start, date(2024, 4, 21));
        assert_eq!(back.end, date(2024, 5, 10));
    }

    #[test]
    fn test_moves_are_relative_to_gesture_origin() {
        let t = task(date(2024, 5, 1), date(2024, 5, 20));
        let mut drag = begin(&t, DragMode::Move, 365.0);
        drag.pointer_move(505.0);
        drag.pointer_move(510.0);
        let last = drag.pointer_move(503.0).unwrap();
        assert_eq!(last.start, date(2024, 5, 4));
    }

    #[test]
    fn test_resize_left_clamps_to_min_duration() {
        let t = task(date(2024, 3, 1), date(2024, 3, 10));
        let mut drag = begin(&t, DragMode::ResizeLeft, 365.0);

        let grown = drag.pointer_move(495.0).unwrap();
        assert_eq!(grown.start, date(2024, 2, 25));
        assert_eq!(grown.end, t.end);

        let clamped = drag.pointer_move(530.0).unwrap();
        assert_eq!(clamped.start, date(2024, 3, 9));
        assert_eq!(clamped.end, t.end);
        assert_eq!(clamped.duration_days(), MIN_DURATION_DAYS);
    }

    #[test]
    fn test_resize_right_clamps_to_min_duration() {
        let t = task(date(2024, 3, 1), date(2024, 3, 10));
        let mut drag = begin(&t, DragMode::ResizeRight, 365.0);

        let grown = drag.pointer_move(505.0).unwrap();
        assert_eq!(grown.start, t.start);
        assert_eq!(grown.end, date(2024, 3, 15));

        let clamped = drag.pointer_move(470.0).unwrap();
        assert_eq!(clamped.start, t.start);
        assert_eq!(clamped.end, date(2024, 3, 2));
    }

    #[test]
    fn test_move_clamps_at_left_edge() {
        let t = task(date(2024, 1, 5), date(2024, 1, 15));
        let mut drag = begin(&t, DragMode::Move, 365.0);
        let moved = drag.pointer_move(400.0).unwrap();
        assert_eq!(moved.start, date(2024, 1, 1));
        assert_eq!(moved.end, date(2024, 1, 11));
        assert_eq!(axis().position(&moved).left, 0.0);
    }

    #[test]
    fn test_move_clamps_at_right_edge() {
        let t = task(date(2024, 12, 20), date(2024, 12, 25));
        let mut drag = begin(&t, DragMode::Move, 365.0);
        let moved = drag.pointer_move(550.0).unwrap();
        assert_eq!(axis().days_from_year_start(moved.end), DAYS_IN_YEAR);
        assert_eq!(moved.duration_days(), 5);
        let pos = axis().position(&moved);
        assert!((pos.left - (100.0 - pos.width)).abs() < 1e-3);
    }

    #[test]
    fn test_resize_edges_stay_in_window() {
        let t = task(date(2024, 1, 10), date(2024, 12, 20));
        let mut left = begin(&t, DragMode::ResizeLeft, 365.0);
        assert_eq!(left.pointer_move(300.0).unwrap().start, date(2024, 1, 1));

        let mut right = begin(&t, DragMode::ResizeRight, 365.0);
        let end = right.pointer_move(700.0).unwrap().end;
        assert_eq!(axis().days_from_year_start(end), DAYS_IN_YEAR);
    }

    #[test]
    fn test_zero_width_container_has_no_effect() {
        let t = task(date(2024, 3, 1), date(2024, 3, 10));
        let mut drag = begin(&t, DragMode::Move, 0.0);
        let moved = drag.pointer_move(900.0).unwrap();
        assert_eq!(moved, t);
    }

    #[test]
    fn test_pointer_up_ends_gesture() {
        let t = task(date(2024, 3, 1), date(2024, 3, 10));
        let mut drag = begin(&t, DragMode::Move, 365.0);
        drag.pointer_move(510.0);
        let done = drag.pointer_up().unwrap();
        assert_eq!(done.start, date(2024, 3, 11));

        assert!(!drag.is_active());
        assert!(drag.pointer_move(600.0).is_none());
        assert!(drag.pointer_up().is_none());
    }

    #[test]
    fn test_new_gesture_replaces_stale_session() {
        let a = task(date(2024, 3, 1), date(2024, 3, 10));
        let b = task(date(2024, 6, 1), date(2024, 6, 10));
        let mut drag = begin(&a, DragMode::Move, 365.0);
        drag.pointer_move(520.0);

        drag.pointer_down(DragSession::new(&b, DragMode::ResizeRight, 100.0, 365.0, axis()));
        assert!(drag.is_dragging(b.id));
        assert!(!drag.is_dragging(a.id));
        let updated = drag.pointer_move(102.0).unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.start, b.start);
        assert_eq!(updated.end, date(2024, 6, 12));
    }

    #[test]
    fn test_move_does_not_snap_bar_crossing_left_edge() {
        let t = task(date(2023, 12, 20), date(2024, 1, 10));
        let mut drag = begin(&t, DragMode::Move, 365.0);

        let outward = drag.pointer_move(490.0).unwrap();
        assert_eq!(outward.start, t.start);
        assert_eq!(outward.end, t.end);

        let inward = drag.pointer_move(505.0).unwrap();
        assert_eq!(inward.start, date(2023, 12, 25));
        assert_eq!(inward.end, date(2024, 1, 15));
    }

    #[test]
    fn test_move_does_not_snap_bar_crossing_right_edge() {
        let t = task(date(2024, 12, 20), date(2025, 1, 10));
        let mut drag = begin(&t, DragMode::Move, 365.0);

        let outward = drag.pointer_move(510.0).unwrap();
        assert_eq!(outward.start, t.start);
        assert_eq!(outward.end, t.end);

        let inward = drag.pointer_move(495.0).unwrap();
        assert_eq!(inward.start, date(2024, 12, 15));
        assert_eq!(inward.end, date(2025, 1, 5));
    }

    #[test]
    fn test_resize_left_on_bar_crossing_left_edge() {
        let t = task(date(2023, 12, 20), date(2024, 1, 10));
        let mut drag = begin(&t, DragMode::ResizeLeft, 365.0);

        let inward = drag.pointer_move(503.0).unwrap();
        assert_eq!(inward.start, date(2023, 12, 23));
        assert_eq!(inward.end, t.end);

        let outward = drag.pointer_move(490.0).unwrap();
        assert_eq!(outward.start, t.start);
        assert_eq!(outward.end, t.end);
    }

    #[test]
    fn test_resize_right_on_bar_crossing_right_edge() {
        let t = task(date(2024, 12, 20), date(2025, 1, 10));
        let mut drag = begin(&t, DragMode::ResizeRight, 365.0);

        let inward = drag.pointer_move(497.0).unwrap();
        assert_eq!(inward.start, t.start);
        assert_eq!(inward.end, date(2025, 1, 7));

        let outward = drag.pointer_move(510.0).unwrap();
        assert_eq!(outward.start, t.start);
        assert_eq!(outward.end, t.end);
    }

    #[test]
    fn test_resize_left_edge_crossing_right_edge_stays_free() {
        // Only the far edge is off-grid; the near edge still moves normally.
        let t = task(date(2024, 12, 20), date(2025, 1, 10));
        let mut drag = begin(&t, DragMode::ResizeLeft, 365.0);
        let grown = drag.pointer_move(490.0).unwrap();
        assert_eq!(grown.start, date(2024, 12, 10));
        assert_eq!(grown.end, t.end);
    }

    #[test]
    fn test_sub_day_movement_leaves_inverted_task_alone() {
        let t = task(date(2024, 3, 10), date(2024, 3, 1));
        for mode in [DragMode::Move, DragMode::ResizeLeft, DragMode::ResizeRight] {
            let mut drag = begin(&t, mode, 365.0);
            assert_eq!(drag.pointer_move(500.2).unwrap(), t, "{:?}", mode);
        }

        let mut right = begin(&t, DragMode::ResizeRight, 365.0);
        assert_eq!(right.pointer_move(501.0).unwrap().end, date(2024, 3, 11));
    }

    #[test]
    fn test_tiny_container_saturates_without_overflow() {
        let t = task(date(2024, 3, 1), date(2024, 3, 10));

        let mut right = begin(&t, DragMode::ResizeRight, 1e-30);
        let end = right.pointer_move(600.0).unwrap().end;
        assert_eq!(axis().days_from_year_start(end), DAYS_IN_YEAR);

        let mut left = begin(&t, DragMode::ResizeLeft, 1e-30);
        assert_eq!(left.pointer_move(400.0).unwrap().start, date(2024, 1, 1));

        let mut moving = begin(&t, DragMode::Move, 1e-30);
        let moved = moving.pointer_move(600.0).unwrap();
        assert_eq!(axis().days_from_year_start(moved.end), DAYS_IN_YEAR);
        assert_eq!(moved.duration_days(), 9);
    }
}
