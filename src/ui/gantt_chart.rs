use crate::model::{BarGeometry, DragController, DragMode, DragSession, Task, YearAxis};
use crate::ui::theme;
use chrono::Datelike;
use egui::{Color32, CursorIcon, PointerButton, Pos2, Rect, Rounding, Sense, Stroke, Ui, Vec2};

const ROW_HEIGHT: f32 = theme::ROW_HEIGHT;
const ROW_PADDING: f32 = theme::ROW_GAP;
const HEADER_HEIGHT: f32 = theme::HEADER_HEIGHT;

/// Display options for the chart, taken from the user settings.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub clamp_to_year: bool,
    pub resize_edge_px: f32,
}

/// Result details from interactions in the Gantt chart.
#[derive(Debug, Clone, Default)]
pub struct ChartInteraction {
    /// Replacement records produced by drags this frame, oldest first.
    pub updated: Vec<Task>,
    /// The gesture ended this frame with this final record.
    pub finished: Option<Task>,
}

/// Render the annual chart (central panel).
pub fn show_gantt_chart(
    tasks: &[Task],
    axis: &YearAxis,
    drag: &mut DragController,
    options: ChartOptions,
    ui: &mut Ui,
) -> ChartInteraction {
    let mut interaction = ChartInteraction::default();
    let available = ui.available_size();
    let chart_width = available.x.max(0.0);

    let rows: Vec<(&Task, f32, f32)> = tasks
        .iter()
        .filter_map(|task| {
            let pos = if options.clamp_to_year {
                axis.clamped_position(task)?
            } else {
                axis.position(task)
            };
            Some((
                task,
                pos.left / 100.0 * chart_width,
                pos.width / 100.0 * chart_width,
            ))
        })
        .collect();

    let chart_height = HEADER_HEIGHT + rows.len() as f32 * (ROW_HEIGHT + ROW_PADDING) + 20.0;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(
                Vec2::new(chart_width, chart_height.max(available.y)),
                Sense::hover(),
            );
            let origin = response.rect.min;
            let painter = painter.with_clip_rect(response.rect);

            painter.rect_filled(response.rect, 0.0, theme::BG_PANEL);

            for i in 0..rows.len() {
                if i % 2 == 1 {
                    let y = origin.y + HEADER_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_PADDING);
                    painter.rect_filled(
                        Rect::from_min_size(
                            Pos2::new(origin.x, y),
                            Vec2::new(chart_width, ROW_HEIGHT + ROW_PADDING),
                        ),
                        0.0,
                        theme::BG_ROW_ODD,
                    );
                }
            }

            draw_month_grid(&painter, origin, axis, chart_width, response.rect.height());
            draw_today_line(&painter, origin, axis, chart_width, response.rect.height());

            if rows.is_empty() {
                painter.text(
                    Pos2::new(origin.x + chart_width / 2.0, origin.y + HEADER_HEIGHT + 40.0),
                    egui::Align2::CENTER_CENTER,
                    format!("No tasks in {}. Add one with the form.", axis.year()),
                    theme::font_bar(),
                    theme::TEXT_DIM,
                );
            }

            for (i, (task, left, width)) in rows.iter().enumerate() {
                let y = origin.y + HEADER_HEIGHT + i as f32 * (ROW_HEIGHT + ROW_PADDING) + ROW_PADDING;
                let is_dragging = drag.is_dragging(task.id);
                let bar_rect = draw_task_bar(&painter, origin, task, *left, *width, y, is_dragging);

                let bar_response = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("task-bar", task.id)),
                    Sense::drag(),
                );
                let geometry = BarGeometry {
                    left: *left,
                    width: bar_rect.width(),
                };

                if bar_response.drag_started_by(PointerButton::Primary) {
                    let press_x = ui
                        .input(|i| i.pointer.press_origin())
                        .or_else(|| bar_response.interact_pointer_pos())
                        .map(|p| p.x - origin.x);
                    if let Some(press_x) = press_x {
                        let mode = DragMode::from_pointer(press_x, geometry, options.resize_edge_px);
                        drag.pointer_down(DragSession::new(task, mode, press_x, chart_width, *axis));
                    }
                }

                if bar_response.hovered() && !drag.is_active() {
                    if let Some(p) = bar_response.hover_pos() {
                        let mode = DragMode::from_pointer(p.x - origin.x, geometry, options.resize_edge_px);
                        ui.ctx().set_cursor_icon(cursor_for(mode));
                    }
                }

                // Tooltip is forced open for the bar being dragged
                let shown = drag
                    .session()
                    .filter(|s| s.task_id() == task.id)
                    .map(|s| s.current())
                    .or_else(|| bar_response.hovered().then_some(*task));
                if let Some(shown) = shown {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("task-tip", task.id)),
                        |ui| {
                            ui.strong(&shown.title);
                            ui.label(shown.date_range_label());
                            ui.label(shown.duration_label());
                        },
                    );
                }
            }

            // Move and release are read from the global pointer state so a
            // gesture that leaves the bar, or the window, still ends.
            if let Some(session) = drag.session() {
                ui.ctx().set_cursor_icon(cursor_for(session.mode()));
                let (pointer_x, moved, released, down) = ui.input(|i| {
                    (
                        i.pointer.latest_pos().map(|p| p.x - origin.x),
                        i.pointer.delta() != Vec2::ZERO,
                        i.pointer.primary_released(),
                        i.pointer.primary_down(),
                    )
                });
                if moved || released {
                    if let Some(x) = pointer_x {
                        if let Some(updated) = drag.pointer_move(x) {
                            interaction.updated.push(updated);
                        }
                    }
                }
                if gesture_ended(released, down) {
                    interaction.finished = drag.pointer_up();
                }
            }
        });

    interaction
}

/// Gestures are driven by the primary button only; a press or release of
/// any other button leaves them alone.
fn gesture_ended(primary_released: bool, primary_down: bool) -> bool {
    primary_released || !primary_down
}

fn cursor_for(mode: DragMode) -> CursorIcon {
    match mode {
        DragMode::Move => CursorIcon::Grab,
        DragMode::ResizeLeft | DragMode::ResizeRight => CursorIcon::ResizeHorizontal,
    }
}

fn draw_month_grid(painter: &egui::Painter, origin: Pos2, axis: &YearAxis, width: f32, height: f32) {
    painter.rect_filled(
        Rect::from_min_size(origin, Vec2::new(width, HEADER_HEIGHT)),
        0.0,
        theme::BG_HEADER,
    );

    let marks = axis.month_marks();
    for (idx, mark) in marks.iter().enumerate() {
        let x = origin.x + mark.offset / 100.0 * width;
        let next_x = marks
            .get(idx + 1)
            .map(|m| origin.x + m.offset / 100.0 * width)
            .unwrap_or(origin.x + width);

        painter.line_segment(
            [Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)],
            Stroke::new(1.0, theme::GRID_LINE),
        );
        painter.text(
            Pos2::new((x + next_x) / 2.0, origin.y + HEADER_HEIGHT / 2.0),
            egui::Align2::CENTER_CENTER,
            mark.label(),
            theme::font_header(),
            theme::TEXT_SECONDARY,
        );
    }

    painter.line_segment(
        [
            Pos2::new(origin.x, origin.y + HEADER_HEIGHT),
            Pos2::new(origin.x + width, origin.y + HEADER_HEIGHT),
        ],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );
}

fn draw_today_line(painter: &egui::Painter, origin: Pos2, axis: &YearAxis, width: f32, height: f32) {
    let today = chrono::Local::now().date_naive();
    if today.year() != axis.year() {
        return;
    }
    let days = axis.days_from_year_start(today) as f32;
    let x = origin.x + days / crate::model::year_axis::DAYS_IN_YEAR as f32 * width;

    painter.line_segment(
        [
            Pos2::new(x, origin.y + HEADER_HEIGHT),
            Pos2::new(x, origin.y + height),
        ],
        Stroke::new(1.5, theme::TODAY_LINE),
    );

    let badge_w = 38.0;
    let badge_rect = Rect::from_min_size(
        Pos2::new(x - badge_w / 2.0, origin.y + HEADER_HEIGHT - 1.0),
        Vec2::new(badge_w, 14.0),
    );
    painter.rect_filled(badge_rect, Rounding::same(3.0), theme::TODAY_LINE);
    painter.text(
        badge_rect.center(),
        egui::Align2::CENTER_CENTER,
        "Today",
        theme::font_small(),
        Color32::WHITE,
    );
}

fn draw_task_bar(
    painter: &egui::Painter,
    origin: Pos2,
    task: &Task,
    left: f32,
    width: f32,
    y: f32,
    is_dragging: bool,
) -> Rect {
    let bar_width = width.max(theme::MIN_BAR_WIDTH);
    let inset = theme::BAR_INSET;

    let bar_rect = Rect::from_min_size(
        Pos2::new(origin.x + left, y + inset),
        Vec2::new(bar_width, ROW_HEIGHT - inset * 2.0),
    );
    let rounding = Rounding::same(theme::BAR_ROUNDING);

    // Soft shadow
    painter.rect_filled(
        bar_rect.translate(Vec2::new(0.0, 2.0)),
        rounding,
        Color32::from_black_alpha(25),
    );
    painter.rect_filled(bar_rect, rounding, task.color);

    if is_dragging {
        painter.rect_stroke(
            bar_rect.expand(1.5),
            Rounding::same(theme::BAR_ROUNDING + 1.5),
            Stroke::new(2.0, theme::BORDER_ACCENT),
        );
        // Edge handles
        let handle_h = bar_rect.height() * 0.55;
        let handle_y = bar_rect.center().y - handle_h / 2.0;
        for x in [bar_rect.left() + 2.0, bar_rect.right() - 5.0] {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x, handle_y), Vec2::new(3.0, handle_h)),
                Rounding::same(1.5),
                theme::HANDLE_COLOR,
            );
        }
    }

    if bar_width > 30.0 {
        let galley = painter.layout_no_wrap(task.title.clone(), theme::font_bar(), theme::TEXT_ON_BAR);
        let text_y = bar_rect.top() + (bar_rect.height() - galley.size().y) / 2.0;
        painter.with_clip_rect(bar_rect.intersect(painter.clip_rect())).galley(
            Pos2::new(bar_rect.left() + 8.0, text_y),
            galley,
            Color32::TRANSPARENT,
        );
    }

    bar_rect
}
