use crate::config::AppSettings;
use crate::model::{ColorPalette, DragController, Task, TaskStore, YearAxis};
use crate::ui;
use crate::ui::gantt_chart::{ChartInteraction, ChartOptions};
use crate::ui::task_form::TaskForm;

/// Main application state.
pub struct ScheduleApp {
    pub store: TaskStore,
    pub palette: ColorPalette,
    pub form: TaskForm,
    pub axis: YearAxis,
    pub drag: DragController,
    pub settings: AppSettings,

    // Status message
    pub status_message: String,
}

impl ScheduleApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let axis = settings
            .reference_year
            .and_then(YearAxis::new)
            .unwrap_or_else(YearAxis::current);
        let palette = ColorPalette::default();
        let initial_color = if settings.cycle_colors {
            palette.peek()
        } else {
            settings.default_color()
        };
        let form = TaskForm::new(initial_color, settings.default_color());

        Self {
            store: TaskStore::new(),
            palette,
            form,
            axis,
            drag: DragController::new(),
            settings,
            status_message: "Ready".to_string(),
        }
    }

    // --- Year selection ---

    pub fn next_year(&mut self) {
        if let Some(axis) = self.axis.next() {
            self.set_axis(axis, true);
        }
    }

    pub fn previous_year(&mut self) {
        if let Some(axis) = self.axis.previous() {
            self.set_axis(axis, true);
        }
    }

    pub fn go_to_current_year(&mut self) {
        self.set_axis(YearAxis::current(), false);
    }

    fn set_axis(&mut self, axis: YearAxis, pinned: bool) {
        // A gesture measured against the old year would map to wrong dates
        self.drag.pointer_up();
        self.axis = axis;
        self.settings.reference_year = pinned.then_some(axis.year());
        self.settings.save_to_default();
        self.status_message = format!("Showing {}", axis.year());
    }

    // --- Task operations ---

    pub fn add_task(&mut self, task: Task) {
        self.status_message = format!("Added '{}' ({})", task.title, task.date_range_label());
        self.store.add(task);
    }

    /// Apply the records emitted by the chart, replacing by id.
    pub fn apply_chart_interaction(&mut self, interaction: ChartInteraction) {
        for task in interaction.updated {
            self.store.replace(task);
        }
        if let Some(task) = interaction.finished.and_then(|t| self.store.get(t.id)) {
            self.status_message = format!("Updated '{}' ({})", task.title, task.date_range_label());
        }
    }

    /// Put the palette's upcoming color (or the configured default) in the form.
    pub fn reset_form_color(&mut self) {
        self.form.color_overridden = false;
        self.form.color = if self.settings.cycle_colors {
            self.palette.peek()
        } else {
            self.settings.default_color()
        };
    }
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = if self.store.is_empty() {
                            "No tasks".to_string()
                        } else {
                            format!("Tasks: {}", self.store.len())
                        };
                        ui.label(
                            egui::RichText::new(count)
                                .font(ui::theme::font_status())
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Left panel: task form
        let mut new_task = None;
        egui::SidePanel::left("form_panel")
            .exact_width(ui::theme::SIDE_PANEL_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::same(12.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE)),
            )
            .show(ctx, |ui| {
                let palette = if self.settings.cycle_colors {
                    Some(&mut self.palette)
                } else {
                    None
                };
                new_task = ui::task_form::show_task_form(&mut self.form, palette, ui);
            });
        if let Some(task) = new_task {
            self.add_task(task);
        }

        // Central panel: chart
        let options = ChartOptions {
            clamp_to_year: self.settings.clamp_to_year,
            resize_edge_px: self.settings.resize_edge_px,
        };
        let chart_frame = egui::Frame::default()
            .fill(ui::theme::BG_PAGE)
            .inner_margin(egui::Margin::same(12.0));
        egui::CentralPanel::default().frame(chart_frame).show(ctx, |ui| {
            let interaction = ui::gantt_chart::show_gantt_chart(
                self.store.tasks(),
                &self.axis,
                &mut self.drag,
                options,
                ui,
            );
            self.apply_chart_interaction(interaction);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette::TASK_COLORS;
    use crate::model::{DragMode, DragSession};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn app() -> ScheduleApp {
        ScheduleApp::with_settings(AppSettings {
            reference_year: Some(2024),
            ..Default::default()
        })
    }

    #[test]
    fn test_reference_year_from_settings() {
        assert_eq!(app().axis.year(), 2024);
    }

    #[test]
    fn test_form_starts_with_first_palette_color() {
        assert_eq!(app().form.color, TASK_COLORS[0]);

        let plain = ScheduleApp::with_settings(AppSettings {
            cycle_colors: false,
            ..Default::default()
        });
        assert_eq!(plain.form.color, plain.settings.default_color());
    }

    #[test]
    fn test_drag_updates_flow_back_into_store() {
        let mut app = app();
        let task = Task::new("a", date(3, 1), date(3, 10), TASK_COLORS[0]);
        let id = task.id;
        app.add_task(task.clone());

        app.drag
            .pointer_down(DragSession::new(&task, DragMode::Move, 0.0, 1000.0, app.axis));
        let mut interaction = ChartInteraction::default();
        interaction.updated.extend(app.drag.pointer_move(100.0));
        interaction.finished = app.drag.pointer_up();
        app.apply_chart_interaction(interaction);

        let stored = app.store.get(id).unwrap();
        assert_eq!(stored.start, date(4, 7));
        assert_eq!(stored.end, date(4, 16));
        assert_eq!(stored.color, TASK_COLORS[0]);
        assert!(app.status_message.starts_with("Updated 'a'"));
    }

    #[test]
    fn test_update_for_missing_task_is_ignored() {
        let mut app = app();
        app.add_task(Task::new("a", date(3, 1), date(3, 10), TASK_COLORS[0]));
        let ghost = Task::new("ghost", date(1, 1), date(1, 2), TASK_COLORS[1]);
        app.apply_chart_interaction(ChartInteraction {
            updated: vec![ghost],
            finished: None,
        });
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.tasks()[0].title, "a");
    }
}
